use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};
use runboard_core::charts::ChartData;
use runboard_core::metrics::{OverallMetrics, PersonMetricsMap};
use runboard_core::RunRecord;

fn new_table(header: &[&str]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header.to_vec());
    table
}

fn number(value: impl ToString) -> Cell {
    Cell::new(value.to_string()).set_alignment(CellAlignment::Right)
}

/// Summary cards. An empty upload shows zeros.
pub fn summary_table(overall: &OverallMetrics) -> Table {
    let metrics = overall.get().copied().unwrap_or_default();
    let mut table = new_table(&["Metric", "Value"]);
    table
        .add_row(vec![Cell::new("Total runs"), number(metrics.total_runs)])
        .add_row(vec![Cell::new("Total miles"), number(metrics.total_miles)])
        .add_row(vec![Cell::new("Average miles"), number(metrics.average_miles)])
        .add_row(vec![Cell::new("Shortest run"), number(metrics.min_miles)])
        .add_row(vec![Cell::new("Longest run"), number(metrics.max_miles)]);
    table
}

pub fn person_table(person_metrics: &PersonMetricsMap) -> Table {
    let mut table = new_table(&["Runner", "Runs", "Total", "Average", "Min", "Max"]);
    for (person, metrics) in person_metrics.iter() {
        table.add_row(vec![
            Cell::new(person),
            number(metrics.total_runs),
            number(metrics.total_miles),
            number(metrics.average_miles),
            number(metrics.min_miles),
            number(metrics.max_miles),
        ]);
    }
    table
}

pub fn runs_table(records: &[RunRecord]) -> Table {
    let mut table = new_table(&["Date", "Runner", "Miles"]);
    for run in records {
        table.add_row(vec![
            Cell::new(&run.date),
            Cell::new(&run.person),
            number(run.miles),
        ]);
    }
    table
}

pub fn chart_tables(charts: &ChartData) -> (Table, Table) {
    let mut over_time = new_table(&["Date", "Miles"]);
    for point in &charts.distance_over_time {
        over_time.add_row(vec![Cell::new(&point.date), number(point.miles)]);
    }

    let mut per_person = new_table(&["Runner", "Total miles", "Average miles", "Runs"]);
    for point in &charts.per_person {
        per_person.add_row(vec![
            Cell::new(&point.person),
            number(point.total_miles),
            number(point.average_miles),
            number(point.runs),
        ]);
    }

    (over_time, per_person)
}
