pub mod overview;

pub use overview::{
    date_label, greeting, CycleRingView, DashboardOverview, LegendEntry, MetricBar,
};
