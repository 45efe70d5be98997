use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{PlotConfigError, PlotConfigResult};

/// Type tag of the sentinel element that switches a theme element off.
pub const ELEMENT_BLANK: &str = "element_blank";

/// Prefix-matched composite families whose concrete variants live in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompositeFamily {
    Element,
    Position,
    Strip,
}

impl CompositeFamily {
    pub const ALL: [Self; 3] = [Self::Element, Self::Position, Self::Strip];

    /// Generic slot name, e.g. `position` for a descriptor accepting any `position_*`.
    #[must_use]
    pub const fn slot_name(self) -> &'static str {
        match self {
            Self::Element => "element",
            Self::Position => "position",
            Self::Strip => "strip",
        }
    }

    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Element => "element_",
            Self::Position => "position_",
            Self::Strip => "strip_",
        }
    }

    /// Resolves the family a concrete type name belongs to.
    #[must_use]
    pub fn of_type_name(type_name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|family| {
            type_name
                .strip_prefix(family.prefix())
                .is_some_and(|variant| !variant.is_empty())
        })
    }
}

/// Which variants of a family a descriptor slot accepts.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum VariantSlot {
    /// Any variant registered in the catalog under the family prefix.
    Any,
    /// One concrete type name, e.g. `element_text`.
    Fixed(String),
}

/// Closed set of editable field kinds.
///
/// Serialized as the kind name used by the schema tables (`number`,
/// `element_text`, `position`, `colorRamp2`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum FieldKind {
    Select,
    Number,
    String,
    Boolean,
    Numbers,
    Strings,
    List,
    Color,
    Colors,
    ColorRamp2,
    Unit,
    Pair,
    Arrow,
    Gpar,
    Marker,
    Margin,
    Family {
        family: CompositeFamily,
        slot: VariantSlot,
    },
}

impl FieldKind {
    #[must_use]
    pub fn element(type_name: impl Into<String>) -> Self {
        Self::Family {
            family: CompositeFamily::Element,
            slot: VariantSlot::Fixed(type_name.into()),
        }
    }

    #[must_use]
    pub const fn any_of(family: CompositeFamily) -> Self {
        Self::Family {
            family,
            slot: VariantSlot::Any,
        }
    }

    #[must_use]
    pub fn name(&self) -> Cow<'_, str> {
        let name = match self {
            Self::Select => "select",
            Self::Number => "number",
            Self::String => "string",
            Self::Boolean => "boolean",
            Self::Numbers => "numbers",
            Self::Strings => "strings",
            Self::List => "list",
            Self::Color => "color",
            Self::Colors => "colors",
            Self::ColorRamp2 => "colorRamp2",
            Self::Unit => "unit",
            Self::Pair => "pair",
            Self::Arrow => "arrow",
            Self::Gpar => "gpar",
            Self::Marker => "marker",
            Self::Margin => "margin",
            Self::Family {
                family,
                slot: VariantSlot::Any,
            } => family.slot_name(),
            Self::Family {
                slot: VariantSlot::Fixed(type_name),
                ..
            } => return Cow::Borrowed(type_name.as_str()),
        };
        Cow::Borrowed(name)
    }

    /// Kinds edited through a nested `{type, arguments}` editor.
    #[must_use]
    pub fn is_composite(&self) -> bool {
        matches!(
            self,
            Self::ColorRamp2
                | Self::Unit
                | Self::Arrow
                | Self::Gpar
                | Self::Marker
                | Self::Margin
                | Self::Family { .. }
        )
    }

    /// Kinds whose value is always an array, even when a bare scalar is supplied.
    #[must_use]
    pub fn is_vector(&self) -> bool {
        matches!(self, Self::Numbers | Self::Strings | Self::Colors)
    }

    /// The single type tag of a fixed-shape composite (`unit`, `arrow`, ...).
    #[must_use]
    pub fn fixed_type_name(&self) -> Option<&'static str> {
        match self {
            Self::ColorRamp2 => Some("colorRamp2"),
            Self::Unit => Some("unit"),
            Self::Arrow => Some("arrow"),
            Self::Gpar => Some("gpar"),
            Self::Marker => Some("marker"),
            Self::Margin => Some("margin"),
            _ => None,
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

impl FromStr for FieldKind {
    type Err = PlotConfigError;

    fn from_str(input: &str) -> PlotConfigResult<Self> {
        let kind = match input {
            "select" => Self::Select,
            "number" => Self::Number,
            "string" => Self::String,
            "boolean" => Self::Boolean,
            "numbers" => Self::Numbers,
            "strings" => Self::Strings,
            "list" => Self::List,
            "color" => Self::Color,
            "colors" => Self::Colors,
            "colorRamp2" => Self::ColorRamp2,
            "unit" => Self::Unit,
            "pair" => Self::Pair,
            "arrow" => Self::Arrow,
            "gpar" => Self::Gpar,
            "marker" => Self::Marker,
            "margin" => Self::Margin,
            other => {
                if let Some(family) = CompositeFamily::ALL
                    .into_iter()
                    .find(|family| family.slot_name() == other)
                {
                    return Ok(Self::any_of(family));
                }
                let family = CompositeFamily::of_type_name(other).ok_or_else(|| {
                    PlotConfigError::InvalidData(format!("unknown field kind `{other}`"))
                })?;
                Self::Family {
                    family,
                    slot: VariantSlot::Fixed(other.to_owned()),
                }
            }
        };
        Ok(kind)
    }
}

impl TryFrom<String> for FieldKind {
    type Error = PlotConfigError;

    fn try_from(value: String) -> PlotConfigResult<Self> {
        value.parse()
    }
}

impl From<FieldKind> for String {
    fn from(kind: FieldKind) -> Self {
        kind.name().into_owned()
    }
}

/// Makes a field read-only while a sibling field holds a given value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisabledWhen {
    pub field: String,
    pub equals: Value,
}

/// One editable parameter of a composite type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDescriptor {
    pub name: String,
    pub kind: FieldKind,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step: Option<f64>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disabled_when: Option<DisabledWhen>,
}

impl FieldDescriptor {
    #[must_use]
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
            options: Vec::new(),
            default: None,
            min: None,
            max: None,
            step: None,
            required: false,
            disabled_when: None,
        }
    }

    /// Select field over string options.
    #[must_use]
    pub fn select<I, S>(name: impl Into<String>, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(name, FieldKind::Select).with_options(
            options
                .into_iter()
                .map(|option| Value::String(option.into())),
        )
    }

    #[must_use]
    pub fn with_options(mut self, options: impl IntoIterator<Item = Value>) -> Self {
        self.options = options.into_iter().collect();
        self
    }

    #[must_use]
    pub fn with_default(mut self, default: Value) -> Self {
        self.default = Some(default);
        self
    }

    #[must_use]
    pub fn with_bounds(mut self, min: f64, max: f64) -> Self {
        self.min = Some(min);
        self.max = Some(max);
        self
    }

    #[must_use]
    pub fn with_min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    #[must_use]
    pub fn with_step(mut self, step: f64) -> Self {
        self.step = Some(step);
        self
    }

    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    #[must_use]
    pub fn disabled_when(mut self, field: impl Into<String>, equals: Value) -> Self {
        self.disabled_when = Some(DisabledWhen {
            field: field.into(),
            equals,
        });
        self
    }

    /// True when every option is a JSON number, so widget strings coerce to numbers.
    #[must_use]
    pub fn has_numeric_options(&self) -> bool {
        !self.options.is_empty() && self.options.iter().all(Value::is_number)
    }

    /// Integer-only numeric field.
    #[must_use]
    pub fn is_unit_step(&self) -> bool {
        self.step == Some(1.0)
    }
}

/// Looks up a descriptor by field name.
#[must_use]
pub fn find_descriptor<'a>(
    descriptors: &'a [FieldDescriptor],
    name: &str,
) -> Option<&'a FieldDescriptor> {
    descriptors.iter().find(|descriptor| descriptor.name == name)
}

/// Returns the first field name that appears twice, if any.
#[must_use]
pub fn duplicate_field_name(descriptors: &[FieldDescriptor]) -> Option<&str> {
    descriptors.iter().enumerate().find_map(|(index, descriptor)| {
        descriptors[..index]
            .iter()
            .any(|earlier| earlier.name == descriptor.name)
            .then_some(descriptor.name.as_str())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_names_round_trip_through_parse() {
        for name in [
            "select",
            "numbers",
            "colorRamp2",
            "margin",
            "position",
            "element_text",
            "strip_nested",
        ] {
            let kind: FieldKind = name.parse().expect("known kind");
            assert_eq!(kind.name(), name);
        }
    }

    #[test]
    fn family_prefix_requires_variant() {
        assert!("element_".parse::<FieldKind>().is_err());
        assert!("geom_point".parse::<FieldKind>().is_err());
        assert_eq!(
            "position".parse::<FieldKind>().expect("slot"),
            FieldKind::any_of(CompositeFamily::Position)
        );
    }

    #[test]
    fn duplicate_names_are_detected() {
        let descriptors = vec![
            FieldDescriptor::new("size", FieldKind::Number),
            FieldDescriptor::new("colour", FieldKind::Color),
            FieldDescriptor::new("size", FieldKind::Number),
        ];
        assert_eq!(duplicate_field_name(&descriptors), Some("size"));
        assert_eq!(duplicate_field_name(&descriptors[..2]), None);
    }
}
