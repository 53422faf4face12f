use super::*;

#[test]
fn default_theme_matches_default_attribute_specs() {
    let theme = Theme::default();
    assert_eq!(theme.style(Token::Normal), "default/default".parse::<Style>().unwrap());
    assert_eq!(theme.style(Token::Highlight), "white/blue".parse::<Style>().unwrap());
    assert_eq!(theme.style(Token::Border), theme.normal);
}
