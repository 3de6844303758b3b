use serde::{Deserialize, Serialize};

/// Macro to generate enum with as_str + Display.
/// The string form is also the serde wire form.
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum $name {
            $(#[serde(rename = $s)] $variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$(Self::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

str_enum!(Symptom {
    Headache => "headache",
    Nausea => "nausea",
    Vomiting => "vomiting",
    Fatigue => "fatigue",
    Bleeding => "bleeding",
    Swelling => "swelling",
    Fever => "fever",
    Pain => "pain",
    Dizziness => "dizziness",
    ShortnessOfBreath => "shortness of breath",
    BackPain => "back pain",
    Cramps => "cramps",
    Heartburn => "heartburn",
    Itching => "itching",
    Constipation => "constipation",
    Insomnia => "insomnia",
    LossOfAppetite => "loss of appetite",
    UrinationChanges => "urination changes",
});

str_enum!(YesNo {
    Yes => "Yes",
    No => "No",
});

str_enum!(Language {
    English => "English",
    Hindi => "Hindi",
});

impl Default for Language {
    fn default() -> Self {
        Self::English
    }
}

/// Join symptoms the way every text surface shows them: `a, b, c`.
pub fn join_symptoms(symptoms: &[Symptom]) -> String {
    symptoms
        .iter()
        .map(Symptom::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
