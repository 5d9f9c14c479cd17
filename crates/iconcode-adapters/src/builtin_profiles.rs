//! Font profiles shipped with the binary.

use iconcode_core::{
    domain::{CodePoint, FontProfile},
    error::IconcodeResult,
};

/// Font Awesome's private-use block.
pub fn fontawesome() -> IconcodeResult<FontProfile> {
    let profile = FontProfile::new(
        "fontawesome",
        "FontAwesome",
        "Font Awesome",
        CodePoint::new(0xF000)?,
        CodePoint::new(0xF8FF)?,
    )?;
    Ok(profile)
}

/// Every built-in profile, Material Design first.
pub fn all_profiles() -> IconcodeResult<Vec<FontProfile>> {
    Ok(vec![FontProfile::material(), fontawesome()?])
}

#[cfg(test)]
mod tests {
    use super::*;
    use iconcode_core::domain::IconValidator;

    #[test]
    fn builtins_have_unique_names() {
        let profiles = all_profiles().unwrap();
        let mut names: Vec<_> = profiles.iter().map(FontProfile::name).collect();
        names.dedup();
        assert_eq!(names, ["material", "fontawesome"]);
    }

    #[test]
    fn fontawesome_range() {
        let fa = fontawesome().unwrap();
        assert_eq!(fa.font_family_name(), "FontAwesome");
        assert!(fa.validate(CodePoint::new(0xF000).unwrap()).is_valid);
        assert!(!fa.validate(CodePoint::new(0xEFFF).unwrap()).is_valid);
    }
}
