//! Attributes and their three categories.

catalog_enum! {
    /// Attribute group, ranked by priority during creation.
    AttributeCategory {
        Physical => "Physical",
        Social => "Social",
        Mental => "Mental",
    }
}

catalog_enum! {
    /// The nine attributes. Every character starts with one dot in each.
    Attribute {
        Strength => "Strength",
        Dexterity => "Dexterity",
        Stamina => "Stamina",
        Charisma => "Charisma",
        Manipulation => "Manipulation",
        Appearance => "Appearance",
        Perception => "Perception",
        Intelligence => "Intelligence",
        Wits => "Wits",
    }
}

impl Attribute {
    pub fn category(self) -> AttributeCategory {
        match self {
            Attribute::Strength | Attribute::Dexterity | Attribute::Stamina => {
                AttributeCategory::Physical
            }
            Attribute::Charisma | Attribute::Manipulation | Attribute::Appearance => {
                AttributeCategory::Social
            }
            Attribute::Perception | Attribute::Intelligence | Attribute::Wits => {
                AttributeCategory::Mental
            }
        }
    }
}

impl AttributeCategory {
    /// Attributes belonging to this category, in sheet order.
    pub fn members(self) -> impl Iterator<Item = Attribute> {
        Attribute::ALL
            .iter()
            .copied()
            .filter(move |attribute| attribute.category() == self)
    }
}
