//! Index tables: column sets with role-gated action buttons, rendered as text.

use serde_json::Value;

use crate::auth::{CurrentUser, ROLE_ADMIN, has_role};
use crate::resources::Resource;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellFormat {
    Plain,
    /// Booleans shown as `Yes` / `No`.
    YesNo,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    Edit,
    Delete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonVariant {
    Primary,
    Danger,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnKind {
    Field {
        accessor: &'static str,
        format: CellFormat,
    },
    Button {
        variant: ButtonVariant,
        action: RowAction,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub header: &'static str,
    pub kind: ColumnKind,
}

impl Column {
    pub const fn field(header: &'static str, accessor: &'static str) -> Self {
        Self {
            header,
            kind: ColumnKind::Field {
                accessor,
                format: CellFormat::Plain,
            },
        }
    }

    pub const fn yes_no(header: &'static str, accessor: &'static str) -> Self {
        Self {
            header,
            kind: ColumnKind::Field {
                accessor,
                format: CellFormat::YesNo,
            },
        }
    }

    pub const fn button(header: &'static str, variant: ButtonVariant, action: RowAction) -> Self {
        Self {
            header,
            kind: ColumnKind::Button { variant, action },
        }
    }

    pub fn is_button(&self) -> bool {
        matches!(self.kind, ColumnKind::Button { .. })
    }
}

/// Columns shown to `user`: the resource's data columns, plus Edit and Delete
/// buttons only for administrators.
pub fn columns_for<R: Resource>(user: Option<&CurrentUser>) -> Vec<Column> {
    let mut columns = R::columns();
    if has_role(user, ROLE_ADMIN) {
        columns.push(Column::button(
            "Edit",
            ButtonVariant::Primary,
            RowAction::Edit,
        ));
        columns.push(Column::button(
            "Delete",
            ButtonVariant::Danger,
            RowAction::Delete,
        ));
    }
    columns
}

/// Text of one cell. Button cells show the route or action they trigger.
pub fn cell_text<R: Resource>(row: &R, column: &Column) -> String {
    match &column.kind {
        ColumnKind::Field { accessor, format } => {
            let value = serde_json::to_value(row)
                .ok()
                .and_then(|v| v.get(*accessor).cloned())
                .unwrap_or(Value::Null);
            format_value(&value, *format)
        }
        ColumnKind::Button {
            action: RowAction::Edit,
            ..
        } => R::edit_route(&row.identity()),
        ColumnKind::Button {
            action: RowAction::Delete,
            ..
        } => format!("delete {}", row.identity()),
    }
}

fn format_value(value: &Value, format: CellFormat) -> String {
    match (value, format) {
        (Value::Bool(true), CellFormat::YesNo) => "Yes".to_string(),
        (Value::Bool(false), CellFormat::YesNo) => "No".to_string(),
        (Value::Null, _) => String::new(),
        (Value::String(s), _) => s.clone(),
        (other, _) => other.to_string(),
    }
}

/// Renders rows as an aligned plain-text table.
pub fn render<R: Resource>(rows: &[R], columns: &[Column]) -> String {
    let cells: Vec<Vec<String>> = rows
        .iter()
        .map(|row| columns.iter().map(|c| cell_text(row, c)).collect())
        .collect();

    let widths: Vec<usize> = columns
        .iter()
        .enumerate()
        .map(|(i, column)| {
            cells
                .iter()
                .map(|row| row[i].chars().count())
                .chain(std::iter::once(column.header.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();
    let header: Vec<&str> = columns.iter().map(|c| c.header).collect();
    push_line(&mut out, header.iter().copied(), &widths);
    for row in &cells {
        push_line(&mut out, row.iter().map(String::as_str), &widths);
    }
    out
}

fn push_line<'a>(out: &mut String, cells: impl Iterator<Item = &'a str>, widths: &[usize]) {
    let line: Vec<String> = cells
        .zip(widths)
        .map(|(cell, width)| format!("{cell:<width$}"))
        .collect();
    out.push_str(line.join("  ").trim_end());
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use ucsb_admin_api_types::{CurrentUserResponse, HelpRequest, RoleGrant, UserProfile};

    use super::*;

    fn user(roles: &[&str]) -> CurrentUser {
        CurrentUser::from(CurrentUserResponse {
            user: UserProfile {
                id: 1,
                email: "phtcon@ucsb.edu".into(),
                full_name: None,
                given_name: None,
                family_name: None,
                admin: false,
            },
            roles: roles
                .iter()
                .map(|r| RoleGrant {
                    authority: (*r).to_string(),
                })
                .collect(),
        })
    }

    fn sample() -> HelpRequest {
        HelpRequest {
            id: Some(2),
            requester_email: "student2@ucsb.edu".into(),
            team_id: "s23-6pm-3".into(),
            table_or_breakout_room: "Breakout Room 2".into(),
            request_time: Some("2025-02-10T16:15:00".into()),
            explanation: "Having trouble connecting to the database".into(),
            solved: true,
        }
    }

    #[test]
    fn buttons_present_iff_admin() {
        let admin = user(&["ROLE_USER", "ROLE_ADMIN"]);
        let plain = user(&["ROLE_USER"]);

        for (who, expected) in [(Some(&admin), true), (Some(&plain), false), (None, false)] {
            let columns = columns_for::<HelpRequest>(who);
            let has_buttons = columns.iter().any(Column::is_button);
            assert_eq!(has_buttons, expected);
            assert_eq!(has_buttons, has_role(who, ROLE_ADMIN));
        }
    }

    #[test]
    fn admin_gets_edit_then_delete() {
        let admin = user(&["ROLE_ADMIN"]);
        let columns = columns_for::<HelpRequest>(Some(&admin));
        let headers: Vec<&str> = columns.iter().rev().take(2).map(|c| c.header).collect();
        assert_eq!(headers, vec!["Delete", "Edit"]);
    }

    #[test]
    fn solved_renders_yes_no() {
        let row = sample();
        let solved = Column::yes_no("Solved", "solved");
        assert_eq!(cell_text(&row, &solved), "Yes");
    }

    #[test]
    fn edit_button_shows_edit_route() {
        let row = sample();
        let edit = Column::button("Edit", ButtonVariant::Primary, RowAction::Edit);
        assert_eq!(cell_text(&row, &edit), "/helprequests/edit/2");
    }

    #[test]
    fn render_aligns_columns() {
        let columns = vec![Column::field("id", "id"), Column::field("Team", "teamId")];
        let text = render(&[sample()], &columns);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "id  Team");
        assert_eq!(lines[1], "2   s23-6pm-3");
    }
}
