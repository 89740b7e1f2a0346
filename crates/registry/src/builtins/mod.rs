//! Builtin converters and their one-time installation.
//!
//! [`install`] populates a manager's registry with the stock `(type, context,
//! converter)` table. It runs inside the manager's bootstrap pass, so the
//! registrations below must go through the manager itself (re-entrant calls
//! are no-ops, not recursion).

use std::path::PathBuf;
use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use typecast_core::value::{Color, FontSpec};
use typecast_core::{Converter, Numeric};

pub mod array;
pub mod boolean;
pub mod color;
pub mod datetime;
pub mod enums;
pub mod fallback;
pub mod font;
pub mod numeric;
pub mod path;
pub mod text;

use crate::contexts;
use crate::manager::ConverterManager;

use self::array::ArrayConverter;
use self::boolean::BooleanConverter;
use self::color::{ColorConverter, ColorFormat};
use self::datetime::{DateConverter, DateTimeConverter, TimeConverter};
use self::font::FontConverter;
use self::numeric::{CurrencyConverter, NumberConverter, PercentConverter};
use self::path::PathConverter;
use self::text::{PasswordConverter, StringConverter};

/// Installs the builtin converter table into `manager`.
pub(crate) fn install(manager: &ConverterManager) {
	macro_rules! numbers {
		($($ty:ty),+ $(,)?) => {
			$(
				manager.register_converter::<$ty>(Arc::new(NumberConverter::<$ty>::new()), None);
				manager.registry().link_marker_of::<$ty, Numeric>();
			)+
		};
	}
	numbers!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

	manager.register_converter::<f64>(
		Arc::new(PercentConverter::<f64>::new()),
		Some(&contexts::percent()),
	);
	manager.register_converter::<f32>(
		Arc::new(PercentConverter::<f32>::new()),
		Some(&contexts::percent()),
	);
	manager.register_converter::<f64>(
		Arc::new(CurrencyConverter::new()),
		Some(&contexts::currency()),
	);

	manager.register_converter::<bool>(Arc::new(BooleanConverter::new()), None);

	manager.register_converter::<Color>(Arc::new(ColorConverter::new(ColorFormat::Rgb)), None);
	manager.register_converter::<Color>(
		Arc::new(ColorConverter::new(ColorFormat::Rgba)),
		Some(&contexts::rgba()),
	);
	manager.register_converter::<Color>(
		Arc::new(ColorConverter::new(ColorFormat::Hex)),
		Some(&contexts::hex()),
	);
	manager.register_converter::<Color>(
		Arc::new(ColorConverter::new(ColorFormat::HexAlpha)),
		Some(&contexts::hex_alpha()),
	);

	manager.register_converter::<NaiveDate>(Arc::new(DateConverter::new()), None);
	manager.register_converter::<NaiveTime>(Arc::new(TimeConverter::new()), None);
	manager.register_converter::<NaiveDateTime>(Arc::new(DateTimeConverter::new()), None);

	manager.register_converter::<PathBuf>(Arc::new(PathConverter), None);
	manager.register_converter::<FontSpec>(Arc::new(FontConverter), None);

	let strings: Arc<dyn Converter> = Arc::new(StringConverter);
	manager.register_converter::<String>(strings.clone(), None);
	manager.register_converter::<String>(strings, Some(&contexts::multiline()));
	manager.register_converter::<String>(
		Arc::new(PasswordConverter::new()),
		Some(&contexts::password()),
	);

	manager.register_converter::<Vec<String>>(
		Arc::new(ArrayConverter::<String>::new(Arc::new(StringConverter))),
		None,
	);
	manager.register_converter::<Vec<i32>>(
		Arc::new(ArrayConverter::<i32>::new(Arc::new(NumberConverter::<i32>::new()))),
		None,
	);
	manager.register_converter::<Vec<i64>>(
		Arc::new(ArrayConverter::<i64>::new(Arc::new(NumberConverter::<i64>::new()))),
		None,
	);
	manager.register_converter::<Vec<f64>>(
		Arc::new(ArrayConverter::<f64>::new(Arc::new(NumberConverter::<f64>::new()))),
		None,
	);
	manager.register_converter::<Vec<bool>>(
		Arc::new(ArrayConverter::<bool>::new(Arc::new(BooleanConverter::new()))),
		None,
	);
}
