//! Chat intake prompt tables, one per supported language.

use serde::Serialize;

use crate::models::Language;

/// Every prompt the intake screen shows, in one language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Prompts {
    pub greet: &'static str,
    pub name: &'static str,
    pub age: &'static str,
    pub weight: &'static str,
    pub weeks: &'static str,
    pub symptoms: &'static str,
    pub consult: &'static str,
    pub vaccination: &'static str,
    pub appointments: &'static str,
    pub download: &'static str,
}

const ENGLISH: Prompts = Prompts {
    greet: "Hi! I am Matrubot. Let's check your maternal health.",
    name: "Enter your name:",
    age: "Enter your age:",
    weight: "Enter your weight in kg:",
    weeks: "Pregnancy period in weeks:",
    symptoms: "Select your symptoms:",
    consult: "Have you consulted a doctor?",
    vaccination: "Are your pregnancy vaccinations up-to-date?",
    appointments: "Add your next appointment date (optional):",
    download: "📄 Download Report",
};

const HINDI: Prompts = Prompts {
    greet: "नमस्ते! मैं Matrubot हूँ। अपने गर्भ स्वास्थ्य की जांच करें।",
    name: "अपना नाम दर्ज करें:",
    age: "अपनी उम्र दर्ज करें:",
    weight: "अपना वजन (kg) दर्ज करें:",
    weeks: "गर्भावस्था का समय (सप्ताह में) दर्ज करें:",
    symptoms: "अपनी लक्षण चुनें:",
    consult: "क्या आपने डॉक्टर से सलाह ली है?",
    vaccination: "क्या आपकी गर्भावस्था के लिए सभी टीकाकरण पूरे हैं?",
    appointments: "अपनी अगली अपॉइंटमेंट की तारीख जोड़ें:",
    download: "📄 रिपोर्ट डाउनलोड करें",
};

pub fn prompts_for(language: Language) -> &'static Prompts {
    match language {
        Language::English => &ENGLISH,
        Language::Hindi => &HINDI,
    }
}
