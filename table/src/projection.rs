use crate::Table;

/// A typed view of an inline struct record.
///
/// Struct records have a fixed layout and live directly inside their parent
/// (for example, as the elements of a vector). A projection is handed a
/// [`Table`] anchored at the first byte of the record and decodes its fields
/// on demand, typically with [`Table::get`] at `table.pos() + field_offset`.
///
/// ```
/// use flatview_table::{Result, StructProjection, Table};
///
/// #[derive(Clone, Copy)]
/// struct Point<'a> {
///     tab: Table<'a>,
/// }
///
/// impl<'a> StructProjection<'a> for Point<'a> {
///     fn init(tab: Table<'a>) -> Self {
///         Point { tab }
///     }
/// }
///
/// impl Point<'_> {
///     fn x(&self) -> Result<i16> {
///         self.tab.get(self.tab.pos())
///     }
///
///     fn y(&self) -> Result<i16> {
///         self.tab.get(self.tab.pos() + 2)
///     }
/// }
///
/// let buf = [3, 0, 0xfe, 0xff];
/// let point = Point::init(Table::new(&buf, 0));
/// assert_eq!(point.x().unwrap(), 3);
/// assert_eq!(point.y().unwrap(), -2);
/// ```
pub trait StructProjection<'a>: Sized {
    /// Build the projection. Must not read or copy any bytes.
    fn init(tab: Table<'a>) -> Self;
}

/// The raw projection: the anchored table itself.
impl<'a> StructProjection<'a> for Table<'a> {
    fn init(tab: Table<'a>) -> Self {
        tab
    }
}
