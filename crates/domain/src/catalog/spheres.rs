//! The nine Spheres of magic.
//!
//! The Technocracy names three of them differently. Those names parse to the
//! same sphere and are available through [`Sphere::technocratic_name`].

catalog_enum! {
    Sphere {
        Correspondence => "Correspondence" | "Data",
        Entropy => "Entropy",
        Forces => "Forces",
        Life => "Life",
        Matter => "Matter",
        Mind => "Mind",
        Prime => "Prime" | "Primal Utility",
        Spirit => "Spirit" | "Dimensional Science",
        Time => "Time",
    }
}

impl Sphere {
    /// The Technocratic Union's name for this sphere.
    pub fn technocratic_name(self) -> &'static str {
        match self {
            Sphere::Correspondence => "Data",
            Sphere::Prime => "Primal Utility",
            Sphere::Spirit => "Dimensional Science",
            other => other.name(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn technocratic_aliases_parse_to_the_same_sphere() {
        assert_eq!("Data".parse::<Sphere>().unwrap(), Sphere::Correspondence);
        assert_eq!("primal utility".parse::<Sphere>().unwrap(), Sphere::Prime);
        assert_eq!(
            "Dimensional Science".parse::<Sphere>().unwrap(),
            Sphere::Spirit
        );
    }

    #[test]
    fn unaliased_spheres_keep_their_name() {
        assert_eq!(Sphere::Forces.technocratic_name(), "Forces");
        assert_eq!(Sphere::Spirit.technocratic_name(), "Dimensional Science");
    }
}
