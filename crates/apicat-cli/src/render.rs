//! Text rendering of page views.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use apicat_core::{BranchTimeline, Category, TimelineEntry};
use apicat_model::SpecItem;
use apicat_nav::Breadcrumb;

use crate::view::{CatalogueListView, CatalogueView, InterfaceView};

const BREADCRUMB_SEPARATOR: &str = " › ";

/// One-line breadcrumb trail; navigable entries show their target.
pub fn breadcrumb_line(breadcrumbs: &[Breadcrumb]) -> String {
    breadcrumbs
        .iter()
        .map(|crumb| match &crumb.target {
            Some(target) => format!("{} <{target}>", crumb.label),
            None => crumb.label.clone(),
        })
        .collect::<Vec<_>>()
        .join(BREADCRUMB_SEPARATOR)
}

/// Topic checkboxes, one per line.
pub fn topic_lines(view: &CatalogueListView<'_>) -> Vec<String> {
    view.topics
        .iter()
        .map(|choice| {
            let mark = if choice.selected { "[x]" } else { "[ ]" };
            format!("{mark} {} -> {}", choice.topic, choice.toggle_url)
        })
        .collect()
}

pub fn render_catalogue_list(view: &CatalogueListView<'_>) -> String {
    let mut out = vec![breadcrumb_line(&view.breadcrumbs), String::new()];
    if !view.topics.is_empty() {
        out.push("Topics:".to_string());
        out.extend(topic_lines(view));
        if let Some(url) = &view.clear_topics_url {
            out.push(format!("Clear filter -> {url}"));
        }
        out.push(String::new());
    }
    out.push(format!(
        "Showing {} of {} catalogues",
        view.catalogues.len(),
        view.total
    ));

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Catalogue"),
        header_cell("Description"),
        header_cell("Topics"),
        header_cell("Interfaces"),
        header_cell("Link"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 3, CellAlignment::Right);
    for row in &view.catalogues {
        let catalogue = row.value;
        table.add_row(vec![
            title_cell(&catalogue.title),
            Cell::new(&catalogue.description),
            optional_cell(catalogue.topics().join(", ")),
            Cell::new(catalogue.spec_evolution_summaries.len()),
            dim_cell(&row.url),
        ]);
    }
    out.push(table.to_string());
    out.join("\n")
}

pub fn render_catalogue(view: &CatalogueView<'_>) -> String {
    let mut out = vec![breadcrumb_line(&view.breadcrumbs), String::new()];
    out.push(view.catalogue.title.clone());
    if !view.catalogue.description.is_empty() {
        out.push(view.catalogue.description.clone());
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Interface"),
        header_cell("Title"),
        header_cell("Version"),
        header_cell("Proposals"),
        header_cell("Link"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 3, CellAlignment::Right);
    for row in &view.interfaces {
        let summary = row.value;
        let version = summary
            .latest_agreed
            .as_ref()
            .and_then(SpecItem::version)
            .unwrap_or("-");
        table.add_row(vec![
            title_cell(&summary.interface_name),
            Cell::new(summary.display_title()),
            optional_cell(version.to_string()),
            count_cell(summary.number_of_change_proposals),
            dim_cell(&row.url),
        ]);
    }
    out.push(table.to_string());
    out.join("\n")
}

pub fn render_interface(view: &InterfaceView<'_>) -> String {
    let mut out = vec![breadcrumb_line(&view.breadcrumbs), String::new()];

    match view.preview {
        Some(spec) => {
            let title = spec.title().unwrap_or("(unparsed)");
            out.push(format!("Preview: {} @ {} ({title})", spec.path, spec.reference));
        }
        None => match &view.view_state.selected_ref {
            Some(reference) => out.push(format!("Preview: {reference} (not found)")),
            None => out.push("Preview: closed".to_string()),
        },
    }
    if let Some(url) = &view.close_preview_url {
        out.push(format!("Close preview -> {url}"));
    }

    let Some(timeline) = &view.timeline else {
        out.push(format!(
            "Evolution: closed (open -> {})",
            view.toggle_evolution_url
        ));
        return out.join("\n");
    };
    out.push(format!(
        "Evolution: open (close -> {})",
        view.toggle_evolution_url
    ));
    let toggle_label = if view.view_state.is_showing_previous_versions() {
        "Hide previous versions"
    } else {
        "Show previous versions"
    };
    out.push(format!("{toggle_label} -> {}", view.toggle_previous_versions_url));
    for branch in &timeline.branches {
        out.push(String::new());
        out.push(branch_heading(branch));
        out.push(branch_table(branch, view).to_string());
    }
    out.join("\n")
}

fn branch_heading(branch: &BranchTimeline<'_>) -> String {
    let role = if branch.is_main { "main" } else { "release" };
    format!("{} ({role})", branch.branch_name)
}

fn branch_table(branch: &BranchTimeline<'_>, view: &InterfaceView<'_>) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell(""),
        header_cell("Category"),
        header_cell("Ref"),
        header_cell("Tags"),
        header_cell("Pull request"),
    ]);
    apply_table_style(&mut table);
    for entry in &branch.timeline.entries {
        if entry.is_summary_placeholder {
            table.add_row(vec![
                dim_cell(""),
                category_cell(entry.category),
                dim_cell(format!(
                    "{} previous versions",
                    branch.timeline.previous_versions_count
                )),
                dim_cell("-"),
                dim_cell("-"),
            ]);
            continue;
        }
        table.add_row(entry_row(entry, view));
    }
    table
}

fn entry_row(entry: &TimelineEntry<'_>, view: &InterfaceView<'_>) -> Vec<Cell> {
    let item = entry.item;
    let marker = if view.view_state.is_selected(&item.reference) {
        Cell::new("▶")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold)
    } else {
        Cell::new("")
    };
    let pull_request = match &item.pull_request {
        Some(pr) => Cell::new(format!("#{} {}", pr.number, pr.title)),
        None => dim_cell("-"),
    };
    vec![
        marker,
        category_cell(entry.category),
        Cell::new(&item.reference),
        optional_cell(item.tags.join(", ")),
        pull_request,
    ]
}

fn category_cell(category: Category) -> Cell {
    let color = match category {
        Category::LatestAgreed => Color::Green,
        Category::OldVersion => Color::DarkGrey,
        Category::UpcomingRelease => Color::Blue,
        Category::ChangeProposal => Color::Yellow,
    };
    Cell::new(category.label()).fg(color)
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn title_cell(title: &str) -> Cell {
    Cell::new(title)
        .fg(Color::Blue)
        .add_attribute(Attribute::Bold)
}

fn count_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count)
            .fg(Color::Yellow)
            .add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn optional_cell(value: String) -> Cell {
    if value.is_empty() || value == "-" {
        dim_cell("-")
    } else {
        Cell::new(value)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
