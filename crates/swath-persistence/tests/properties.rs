//! Property tests for the document codec.

use proptest::collection::vec;
use proptest::option;
use proptest::prelude::*;

use swath_model::{Array, DataProcessingParameters, FilterItem, FilterParameter, SwathGroup};
use swath_persistence::{parse_project, render_project};

fn attribute_text() -> impl Strategy<Value = String> {
    "[A-Za-z0-9_&<>\"' .-]{0,12}"
}

fn folder_text() -> impl Strategy<Value = String> {
    "[A-Za-z0-9_&<>/. -]{0,12}"
}

fn number() -> impl Strategy<Value = f64> {
    -1.0e6..1.0e6f64
}

fn filter_item() -> impl Strategy<Value = FilterItem> {
    (
        any::<bool>(),
        attribute_text(),
        vec((attribute_text(), option::of("[A-Za-z/]{1,4}")), 0..4),
    )
        .prop_map(|(enabled, name, values)| {
            values
                .into_iter()
                .enumerate()
                .fold(FilterItem::new(enabled, name), |item, (i, (value, uom))| {
                    let parameter = FilterParameter::new(format!("p{i}"), value);
                    item.with_parameter(match uom {
                        Some(uom) => parameter.with_uom(uom),
                        None => parameter,
                    })
                })
        })
}

fn processing_parameters() -> impl Strategy<Value = DataProcessingParameters> {
    (
        attribute_text(),
        attribute_text(),
        number(),
        number(),
        any::<i32>(),
        vec(filter_item(), 0..3),
    )
        .prop_map(|(cut_type, name, min, max, mode, filters)| {
            filters.into_iter().fold(
                DataProcessingParameters::new(cut_type, name).with_range(min, max, mode),
                DataProcessingParameters::with_filter,
            )
        })
}

fn array() -> impl Strategy<Value = Array> {
    (
        attribute_text(),
        any::<i32>(),
        vec(processing_parameters(), 0..3),
    )
        .prop_map(|(antenna, id, params)| {
            params
                .into_iter()
                .fold(Array::new(antenna, id), Array::with_processing)
        })
}

fn swath_group() -> impl Strategy<Value = SwathGroup> {
    (
        attribute_text(),
        any::<bool>(),
        folder_text(),
        number(),
        vec(array(), 0..3),
    )
        .prop_map(|(name, visible, folder, velocity, arrays)| {
            arrays.into_iter().fold(
                SwathGroup::new(name)
                    .with_visible(visible)
                    .with_folder(folder)
                    .with_propagation_velocity(velocity),
                SwathGroup::with_array,
            )
        })
}

proptest! {
    #[test]
    fn render_then_parse_is_identity(groups in vec(swath_group(), 0..4)) {
        let bytes = render_project(&groups).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        prop_assert_eq!(parse_project(&text).unwrap(), groups);
    }

    #[test]
    fn composite_splits_on_first_space(value in "[A-Za-z0-9.]{0,8}", uom in "[A-Za-z0-9 /]{1,8}") {
        let parameter = FilterParameter::from_composite("p", &format!("{value} {uom}"));
        prop_assert_eq!(&parameter.value, &value);
        prop_assert_eq!(parameter.uom.as_deref(), Some(uom.as_str()));
    }

    #[test]
    fn composite_without_space_has_no_unit(value in "[A-Za-z0-9.]{0,8}") {
        let parameter = FilterParameter::from_composite("p", &value);
        prop_assert_eq!(&parameter.value, &value);
        prop_assert!(parameter.uom.is_none());
        prop_assert_eq!(parameter.composite(), value);
    }
}
