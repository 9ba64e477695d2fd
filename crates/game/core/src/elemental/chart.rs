//! Static attacker-versus-defender effectiveness table.

use super::Element;

const N: usize = Element::ALL.len();

/// `CHART[attacker][defender]`; unlisted pairs are neutral.
const CHART: [[f64; N]; N] = build_chart();

const fn build_chart() -> [[f64; N]; N] {
    use Element::*;

    let mut chart = [[1.0; N]; N];
    let overrides: [(Element, Element, f64); 25] = [
        (Fire, Ice, 1.5),
        (Fire, Nature, 1.5),
        (Fire, Fire, 0.5),
        (Ice, Fire, 0.5),
        (Ice, Nature, 1.5),
        (Ice, Ice, 0.5),
        (Shadow, Light, 1.5),
        (Shadow, Divine, 1.5),
        (Shadow, Shadow, 0.5),
        (Light, Shadow, 1.5),
        (Light, Arcane, 1.2),
        (Light, Light, 0.5),
        (Nature, Physical, 0.8),
        (Nature, Arcane, 1.3),
        (Nature, Fire, 0.5),
        (Nature, Ice, 0.5),
        (Arcane, Physical, 1.3),
        (Arcane, Nature, 0.7),
        (Arcane, Arcane, 0.5),
        (Physical, Arcane, 0.7),
        (Physical, Nature, 1.2),
        (Physical, Shadow, 0.8),
        (Divine, Shadow, 2.0),
        (Divine, Arcane, 1.3),
        (Divine, Divine, 0.5),
    ];

    let mut i = 0;
    while i < overrides.len() {
        let (attacker, defender, value) = overrides[i];
        chart[attacker.index()][defender.index()] = value;
        i += 1;
    }
    chart
}

/// Damage multiplier when `attacker` hits a target of element `defender`.
pub fn effectiveness(attacker: Element, defender: Element) -> f64 {
    CHART[attacker.index()][defender.index()]
}

/// Human-readable rating of an attacker/defender pairing.
pub fn effectiveness_description(attacker: Element, defender: Element) -> &'static str {
    let value = effectiveness(attacker, defender);
    if value >= 1.8 {
        "Super effective!"
    } else if value >= 1.3 {
        "Very effective!"
    } else if value >= 1.1 {
        "Effective"
    } else if value >= 0.9 {
        "Normal"
    } else if value >= 0.6 {
        "Not very effective"
    } else if value >= 0.3 {
        "Barely effective"
    } else {
        "Ineffective"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn divine_crushes_shadow() {
        assert_eq!(effectiveness(Element::Divine, Element::Shadow), 2.0);
        assert_eq!(
            effectiveness_description(Element::Divine, Element::Shadow),
            "Super effective!"
        );
    }

    #[test]
    fn listed_self_pairs_are_halved() {
        for element in [
            Element::Fire,
            Element::Ice,
            Element::Shadow,
            Element::Light,
            Element::Arcane,
            Element::Divine,
        ] {
            assert_eq!(effectiveness(element, element), 0.5, "{element}");
        }
    }

    #[test]
    fn unlisted_pairs_are_neutral() {
        assert_eq!(effectiveness(Element::Neutral, Element::Fire), 1.0);
        assert_eq!(effectiveness(Element::Nature, Element::Nature), 1.0);
        assert_eq!(effectiveness(Element::Ice, Element::Shadow), 1.0);
        assert_eq!(effectiveness_description(Element::Fire, Element::Light), "Normal");
    }

    #[test]
    fn descriptions_follow_thresholds() {
        assert_eq!(
            effectiveness_description(Element::Fire, Element::Ice),
            "Very effective!"
        );
        assert_eq!(
            effectiveness_description(Element::Light, Element::Arcane),
            "Effective"
        );
        assert_eq!(
            effectiveness_description(Element::Physical, Element::Shadow),
            "Not very effective"
        );
        assert_eq!(
            effectiveness_description(Element::Ice, Element::Fire),
            "Barely effective"
        );
    }
}
