pub mod demand_analyzer;
pub mod report;

pub use demand_analyzer::{
    DayPeriodMean, DemandAnalyzer, DemandKpis, HourlyMean, WeatherMean, WeekdayHourMatrix,
};
pub use report::{DashboardReport, HeatmapRow};
