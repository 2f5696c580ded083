//! Plain-text rendering of customer result sets.

use custbook_db::models::Customer;

/// Width of the optional leading ID column.
const ID_WIDTH: usize = 6;

/// Render customers as a padded table.
///
/// The output starts and ends with a blank line. Every cell is left-aligned
/// and padded to `width`; with `show_ids` a right-aligned ID column comes
/// first, showing `-` for records without an id.
pub fn render_customers(customers: &[Customer], width: usize, show_ids: bool) -> String {
    let mut out = String::from("\n");

    if show_ids {
        out.push_str(&format!("{:>ID_WIDTH$} | ", "ID"));
    }
    out.push_str(&format!(
        "{:width$} | {:width$} | {:width$}\n",
        "First Name", "Last Name", "Email"
    ));

    let mut rule = 3 * width + 5;
    if show_ids {
        rule += ID_WIDTH + 3;
    }
    out.push_str(&"-".repeat(rule));
    out.push('\n');

    for customer in customers {
        if show_ids {
            let id = customer
                .id
                .map(|id| id.to_string())
                .unwrap_or_else(|| "-".to_string());
            out.push_str(&format!("{id:>ID_WIDTH$} | "));
        }
        out.push_str(&format!(
            "{:width$} | {:width$} | {:width$}\n",
            customer.first_name, customer.last_name, customer.email
        ));
    }

    out.push('\n');
    out
}

/// One-line summary of a single record, with its id when it has one.
pub fn describe_customer(customer: &Customer) -> String {
    match customer.id {
        Some(id) => format!("#{id} {customer}"),
        None => customer.to_string(),
    }
}
