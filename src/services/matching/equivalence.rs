//! Synonym groups for accessory names.
//!
//! Installers and the kit catalog rarely agree on labels for the same
//! physical component ("Sensor RFID" vs "Leitor RFID"). Each group lists
//! normalized substrings that all refer to one component family; two names
//! falling in the same group are treated as equivalent by the similarity
//! predicate.
//!
//! Static, compiled-in data. Members must already be in normalized form
//! (lowercase, no diacritics).

/// Groups of equivalent item-name substrings.
///
/// Groups are not mutually exclusive: a name may hit several groups, which
/// is fine because the predicate only needs a boolean.
pub const EQUIVALENCE_GROUPS: &[&[&str]] = &[
    // RFID reader variants
    &["rfid", "leitor de cartao"],
    // Blocking-relay variants
    &["bloqueio", "rele de bloqueio", "corte de combustivel", "relay"],
    // Driver iButton variants
    &["ibutton", "i-button", "identificador de motorista"],
    // Siren variants
    &["sirene", "siren", "alarme sonoro"],
    // Bluetooth beacon variants
    &["bluetooth", "beacon ble"],
    // Door sensor variants
    &["sensor de porta", "sensor porta"],
];
