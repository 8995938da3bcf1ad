use rusqlite::{
	Row,
	types::FromSql,
	Result as SqlResult,
};

/// Something that can be read from one or more consecutive result columns
pub trait Fetch: Sized {
	fn fetch(fetcher: &mut Fetcher<'_, '_>) -> SqlResult<Self>;

	fn from_row(row: &Row<'_>) -> SqlResult<Self> {
		let mut fetcher = Fetcher::make(row);
		Self::fetch(&mut fetcher)
	}
}
/// Marker for single-column types, keeps the tuple impls coherent
pub trait FromSql2 {}

pub struct Fetcher<'row, 'stmt> {
	index: usize,
	row: &'row Row<'stmt>
}

impl<'row, 'stmt> Fetcher<'row, 'stmt> {
	pub(crate) fn make(row: &'row Row<'stmt>) -> Self {
		Self {index: 0, row}
	}
	#[inline]
	pub fn fetch_column<T: FromSql>(&mut self) -> SqlResult<T> {
		let thing = self.row.get(self.index)?;
		self.index += 1; // fetch parameter index is 0-based
		Ok(thing)
	}
	pub fn fetch<T: Fetch>(&mut self) -> SqlResult<T> {
		T::fetch(self)
	}
}

impl<T: FromSql + FromSql2> Fetch for T {
	fn fetch(fetcher: &mut Fetcher<'_, '_>) -> SqlResult<Self> {
		fetcher.fetch_column()
	}
}

macro_rules! fetch_tuple {
	($( $t:ident ),+) => {
		impl<$( $t: Fetch ),+> Fetch for ($( $t, )+) {
			fn fetch(fetcher: &mut Fetcher<'_, '_>) -> SqlResult<Self> {
				Ok(($( fetcher.fetch::<$t>()?, )+))
			}
		}
	};
}

fetch_tuple!(A, B);
fetch_tuple!(A, B, C, D);

impl FromSql2 for i64 {}

impl FromSql2 for String {}
impl<T: FromSql> FromSql2 for Option<T> {}
