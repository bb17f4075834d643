use super::*;

#[test]
fn test_lowercases() {
    assert_eq!(normalize("SIRENE"), "sirene");
}

#[test]
fn test_strips_diacritics() {
    assert_eq!(normalize("Relé de Bloqueio"), "rele de bloqueio");
    assert_eq!(normalize("Botão de Pânico"), "botao de panico");
}

#[test]
fn test_collapses_whitespace() {
    assert_eq!(normalize("  Sensor   RFID \t"), "sensor rfid");
}

#[test]
fn test_empty_and_blank() {
    assert_eq!(normalize(""), "");
    assert_eq!(normalize("   "), "");
}

#[test]
fn test_punctuation_preserved() {
    // Only case, accents and whitespace change; hyphens stay.
    assert_eq!(normalize("i-Button"), "i-button");
}
