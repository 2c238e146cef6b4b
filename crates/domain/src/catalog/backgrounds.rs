catalog_enum! {
    /// Backgrounds a mage may purchase. Unlisted names are not accepted.
    Background {
        Allies => "Allies",
        AlternateIdentity => "Alternate Identity",
        Arcane => "Arcane",
        Avatar => "Avatar",
        Backup => "Backup",
        Blessing => "Blessing",
        Certification => "Certification",
        Chantry => "Chantry",
        Contacts => "Contacts",
        Cult => "Cult",
        Demesne => "Demesne",
        Destiny => "Destiny",
        Dream => "Dream",
        Enhancement => "Enhancement",
        Fame => "Fame",
        Familiar => "Familiar",
        Influence => "Influence",
        Legend => "Legend",
        Library => "Library",
        Mentor => "Mentor",
        Node => "Node",
        PastLives => "Past Lives",
        Patron => "Patron",
        Rank => "Rank",
        Requisitions => "Requisitions",
        Resources => "Resources",
        Retainers => "Retainers",
        Sanctum => "Sanctum",
        SecretWeapons => "Secret Weapons",
        Spies => "Spies",
        Status => "Status",
        Totem => "Totem",
        Wonder => "Wonder",
    }
}
