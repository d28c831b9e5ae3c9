use dioxus::prelude::*;

/// Scrollable table wrapper.
#[component]
pub fn DataTable(children: Element) -> Element {
    rsx! {
        div { class: "data-table",
            table {
                {children}
            }
        }
    }
}

/// Table header section, wraps `th` elements in a `thead > tr`.
#[component]
pub fn DataTableHeader(children: Element) -> Element {
    rsx! {
        thead {
            tr { {children} }
        }
    }
}

/// Table body section.
#[component]
pub fn DataTableBody(children: Element) -> Element {
    rsx! {
        tbody { {children} }
    }
}

/// Column header cell. `numeric` right-aligns the column.
#[component]
pub fn DataTableColumn(#[props(default)] numeric: bool, children: Element) -> Element {
    rsx! {
        th { class: if numeric { "numeric" } else { "" }, {children} }
    }
}

/// Table row.
#[component]
pub fn DataTableRow(children: Element) -> Element {
    rsx! {
        tr { class: "data-table-row", {children} }
    }
}

/// Table data cell. `numeric` right-aligns the value.
#[component]
pub fn DataTableCell(#[props(default)] numeric: bool, children: Element) -> Element {
    rsx! {
        td { class: if numeric { "numeric" } else { "" }, {children} }
    }
}
