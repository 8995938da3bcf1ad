use rusqlite::{
	Statement,
	ToSql,
	Result as SqlResult,
};

/// Something that can be bound to one or more consecutive statement parameters
pub trait Bind {
	fn bind(&self, binder: &mut Binder<'_, '_>) -> SqlResult<()>;
}
/// Marker for single-parameter types, keeps the tuple impls coherent
pub trait ToSql2 {}

pub struct Binder<'stmt, 'conn> {
	index: usize,
	stmt: &'stmt mut Statement<'conn>
}

impl<'stmt, 'conn> Binder<'stmt, 'conn> {
	pub(crate) fn make(stmt: &'stmt mut Statement<'conn>) -> Self {
		Self {index: 0, stmt}
	}
	#[inline]
	pub fn bind_parameter<T: ToSql>(&mut self, thing: &T) -> SqlResult<()> {
		self.index += 1; // bind parameter index is 1-based
		self.stmt.raw_bind_parameter(self.index, thing)
	}
	pub fn bind<T: Bind + ?Sized>(&mut self, thing: &T) -> SqlResult<()> {
		thing.bind(self)
	}
}

impl<T: ToSql + ToSql2 + ?Sized> Bind for T {
	fn bind(&self, binder: &mut Binder<'_, '_>) -> SqlResult<()> {
		binder.bind_parameter(&self)?;
		Ok(())
	}
}

macro_rules! bind_tuple {
	($( $t:ident ),+) => {
		impl<$( $t: Bind ),+> Bind for ($( $t, )+) {
			#[allow(non_snake_case)]
			fn bind(&self, binder: &mut Binder<'_, '_>) -> SqlResult<()> {
				let ($( $t, )+) = self;
				$( binder.bind($t)?; )+
				Ok(())
			}
		}
	};
}

bind_tuple!(A, B);


impl ToSql2 for i64 {}

impl ToSql2 for String {}

impl<T: ?Sized + ToSql> ToSql2 for &'_ T {}
impl<T: ToSql> ToSql2 for Option<T> {}
