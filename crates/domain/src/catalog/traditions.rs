//! Traditions, Conventions and the affinity spheres each one offers.

use super::Sphere;

catalog_enum! {
    /// The great factions a mage may belong to.
    Affiliation {
        Traditions => "Traditions" | "Council of Nine",
        Technocracy => "Technocracy" | "Technocratic Union",
        Disparates => "Disparates" | "Crafts",
    }
}

catalog_enum! {
    /// A Tradition or Technocratic Convention.
    Tradition {
        AkashicBrotherhood => "Akashic Brotherhood" | "Akashayana",
        CelestialChorus => "Celestial Chorus",
        CultOfEcstasy => "Cult of Ecstasy" | "Sahajiya",
        Dreamspeakers => "Dreamspeakers" | "Kha'vadi",
        Euthanatos => "Euthanatos",
        OrderOfHermes => "Order of Hermes",
        SocietyOfEther => "Society of Ether" | "Sons of Ether",
        Verbena => "Verbena",
        VirtualAdepts => "Virtual Adepts",
        IterationX => "Iteration X",
        NewWorldOrder => "New World Order",
        Progenitors => "Progenitors",
        Syndicate => "Syndicate",
        VoidEngineers => "Void Engineers",
    }
}

impl Tradition {
    pub fn affiliation(self) -> Affiliation {
        use Tradition::*;
        match self {
            IterationX | NewWorldOrder | Progenitors | Syndicate | VoidEngineers => {
                Affiliation::Technocracy
            }
            _ => Affiliation::Traditions,
        }
    }

    /// Spheres this group allows as a starting affinity.
    pub fn affinity_options(self) -> &'static [Sphere] {
        use Sphere::*;
        match self {
            Tradition::AkashicBrotherhood => &[Mind, Life],
            Tradition::CelestialChorus => &[Prime, Forces, Spirit],
            Tradition::CultOfEcstasy => &[Time, Life, Mind],
            Tradition::Dreamspeakers => &[Spirit, Forces, Life, Matter],
            Tradition::Euthanatos => &[Entropy, Life, Spirit],
            Tradition::OrderOfHermes => &[Forces],
            Tradition::SocietyOfEther => &[Matter, Forces, Prime],
            Tradition::Verbena => &[Life, Forces],
            Tradition::VirtualAdepts => &[Correspondence, Forces],
            Tradition::IterationX => &[Forces, Matter, Time],
            Tradition::NewWorldOrder => &[Mind, Correspondence],
            Tradition::Progenitors => &[Life, Prime],
            Tradition::Syndicate => &[Entropy, Mind, Prime],
            Tradition::VoidEngineers => &[Spirit, Correspondence, Forces],
        }
    }

    pub fn offers_affinity(self, sphere: Sphere) -> bool {
        self.affinity_options().contains(&sphere)
    }
}
