//! Configuration defaults for the revenue-lens CLI.

/// Defaults mirroring the dashboard's seeded state.
pub struct DashboardDefaults {
    // Seeded date picker range
    pub start_date: &'static str,
    pub end_date: &'static str,
    // Where the fetched invoice export is kept on disk
    pub invoices_path: &'static str,
}

pub const DEFAULTS: DashboardDefaults = DashboardDefaults {
    start_date: "2020-04-01",
    end_date: "2020-04-30",
    invoices_path: "docs/json/invoices.json",
};
