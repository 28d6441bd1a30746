use crate::domain::model::{Brand, ParsedAddress};
use regex::Regex;
use std::sync::LazyLock;

static NON_DIGIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^0-9]").expect("valid separator pattern"));

/// Splits an already-validated FSP string on every non-digit character.
///
/// # Panics
///
/// Panics when the component count does not match
/// [`Brand::address_components`] or a component is not a `u32`. The
/// validator rejects such input, so reaching either case is a bug.
pub fn parse(fsp_raw: &str, brand: Brand) -> ParsedAddress {
    let components: Vec<u32> = NON_DIGIT
        .split(fsp_raw)
        .map(|part| {
            part.parse::<u32>().unwrap_or_else(|e| {
                panic!("unvalidated FSP component '{part}' in '{fsp_raw}': {e}")
            })
        })
        .collect();

    assert_eq!(
        components.len(),
        brand.address_components(),
        "FSP '{}' does not have the {} components {} expects",
        fsp_raw,
        brand.address_components(),
        brand.display_name()
    );

    ParsedAddress::new(components)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_keeps_order() {
        assert_eq!(parse("1/2/3", Brand::Raisecom).components(), &[1, 2, 3]);
        assert_eq!(
            parse("0/1/12/127", Brand::Huawei).components(),
            &[0, 1, 12, 127]
        );
        assert_eq!(parse("3/64", Brand::Bdcom).components(), &[3, 64]);
    }

    #[test]
    fn test_parse_normalizes_leading_zeros() {
        assert_eq!(parse("1/02/003", Brand::Raisecom).to_string(), "1/2/3");
    }

    #[test]
    #[should_panic(expected = "does not have the 4 components")]
    fn test_component_count_mismatch_is_fatal() {
        parse("1/2/3", Brand::ZteC610);
    }
}
