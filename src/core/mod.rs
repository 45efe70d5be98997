pub mod descriptor;
pub mod value;

pub use descriptor::{
    CompositeFamily, DisabledWhen, ELEMENT_BLANK, FieldDescriptor, FieldKind, VariantSlot,
    duplicate_field_name, find_descriptor,
};
pub use value::{CompositeValue, SparseConfigObject, number_value, parse_finite, value_as_f64};
