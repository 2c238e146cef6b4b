//! Abilities: Talents, Skills and Knowledges.

catalog_enum! {
    /// Ability group, ranked by priority during creation.
    AbilityCategory {
        Talents => "Talents",
        Skills => "Skills",
        Knowledges => "Knowledges",
    }
}

catalog_enum! {
    Ability {
        // Talents
        Alertness => "Alertness",
        Art => "Art",
        Athletics => "Athletics",
        Awareness => "Awareness",
        Brawl => "Brawl",
        Empathy => "Empathy",
        Expression => "Expression",
        Intimidation => "Intimidation",
        Leadership => "Leadership",
        Streetwise => "Streetwise",
        Subterfuge => "Subterfuge",
        // Skills
        Crafts => "Crafts",
        Drive => "Drive",
        Etiquette => "Etiquette",
        Firearms => "Firearms",
        MartialArts => "Martial Arts",
        Meditation => "Meditation",
        Melee => "Melee",
        Research => "Research",
        Stealth => "Stealth",
        Survival => "Survival",
        Technology => "Technology",
        // Knowledges
        Academics => "Academics",
        Computer => "Computer",
        Cosmology => "Cosmology",
        Enigmas => "Enigmas",
        Esoterica => "Esoterica",
        Investigation => "Investigation",
        Law => "Law",
        Medicine => "Medicine",
        Occult => "Occult",
        Politics => "Politics",
        Science => "Science",
    }
}

impl Ability {
    pub fn category(self) -> AbilityCategory {
        use Ability::*;
        match self {
            Alertness | Art | Athletics | Awareness | Brawl | Empathy | Expression
            | Intimidation | Leadership | Streetwise | Subterfuge => AbilityCategory::Talents,
            Crafts | Drive | Etiquette | Firearms | MartialArts | Meditation | Melee | Research
            | Stealth | Survival | Technology => AbilityCategory::Skills,
            Academics | Computer | Cosmology | Enigmas | Esoterica | Investigation | Law
            | Medicine | Occult | Politics | Science => AbilityCategory::Knowledges,
        }
    }
}

impl AbilityCategory {
    /// Abilities belonging to this category, in sheet order.
    pub fn members(self) -> impl Iterator<Item = Ability> {
        Ability::ALL
            .iter()
            .copied()
            .filter(move |ability| ability.category() == self)
    }
}
