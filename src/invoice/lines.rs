use crate::core::DeskError;

use super::types::LineItem;

/// An edit to a caller-owned list of invoice lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineEdit {
    /// Append a line at the end.
    Add(LineItem),
    /// Replace the line at `index`.
    Update { index: usize, item: LineItem },
    /// Remove the line at `index`; later lines shift up.
    Remove(usize),
    /// Remove every line.
    Clear,
}

/// Apply one edit to `items` and hand the list back.
///
/// The list belongs to the caller between edits; nothing is kept here.
pub fn edit_lines(mut items: Vec<LineItem>, edit: LineEdit) -> Result<Vec<LineItem>, DeskError> {
    match edit {
        LineEdit::Add(item) => items.push(item),
        LineEdit::Update { index, item } => {
            let len = items.len();
            let slot = items.get_mut(index).ok_or_else(|| out_of_range(index, len))?;
            *slot = item;
        }
        LineEdit::Remove(index) => {
            if index >= items.len() {
                return Err(out_of_range(index, items.len()));
            }
            items.remove(index);
        }
        LineEdit::Clear => items.clear(),
    }
    Ok(items)
}

fn out_of_range(index: usize, len: usize) -> DeskError {
    DeskError::Builder(format!("line index {index} out of range (have {len} lines)"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn add_update_remove() {
        let items = edit_lines(Vec::new(), LineEdit::Add(LineItem::new("a", dec!(1)))).unwrap();
        let items = edit_lines(items, LineEdit::Add(LineItem::new("b", dec!(2)))).unwrap();
        let items = edit_lines(
            items,
            LineEdit::Update {
                index: 0,
                item: LineItem::new("a2", dec!(3)),
            },
        )
        .unwrap();
        assert_eq!(items[0].description, "a2");

        let items = edit_lines(items, LineEdit::Remove(0)).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].description, "b");

        let items = edit_lines(items, LineEdit::Clear).unwrap();
        assert!(items.is_empty());
    }

    #[test]
    fn out_of_range_is_an_error() {
        let items = vec![LineItem::new("a", dec!(1))];
        assert!(edit_lines(items.clone(), LineEdit::Remove(1)).is_err());
        let err = edit_lines(
            items,
            LineEdit::Update {
                index: 5,
                item: LineItem::new("x", dec!(1)),
            },
        )
        .unwrap_err();
        assert!(matches!(err, DeskError::Builder(_)));
    }
}
