static CONTACT_LENSES_SCHEMA: &str = "\
age: young,pre-presbyopic,presbyopic
spectacle-prescrip: myope,hypermetrope
astigmatism: no,yes
tear-prod-rate: reduced,normal
contact-lenses: soft,hard,none
";

static CONTACT_LENSES_DATA: &str = "\
young,myope,no,reduced,none
young,myope,no,normal,soft
young,myope,yes,reduced,none
young,myope,yes,normal,hard
young,hypermetrope,no,reduced,none
young,hypermetrope,no,normal,soft
young,hypermetrope,yes,reduced,none
young,hypermetrope,yes,normal,hard
pre-presbyopic,myope,no,reduced,none
pre-presbyopic,myope,no,normal,soft
pre-presbyopic,myope,yes,reduced,none
pre-presbyopic,myope,yes,normal,hard
pre-presbyopic,hypermetrope,no,reduced,none
pre-presbyopic,hypermetrope,no,normal,soft
pre-presbyopic,hypermetrope,yes,reduced,none
pre-presbyopic,hypermetrope,yes,normal,none
presbyopic,myope,no,reduced,none
presbyopic,myope,no,normal,none
presbyopic,myope,yes,reduced,none
presbyopic,myope,yes,normal,hard
presbyopic,hypermetrope,no,reduced,none
presbyopic,hypermetrope,no,normal,soft
presbyopic,hypermetrope,yes,reduced,none
presbyopic,hypermetrope,yes,normal,none
";

pub fn load_contact_lenses_raw_data() -> (&'static str, &'static str) {
    (CONTACT_LENSES_SCHEMA, CONTACT_LENSES_DATA)
}
