use serde::Serialize;

/// Languages the pages have text for. Any other stored code reads as English.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Sw,
}

impl Language {
    pub fn from_code(code: &str) -> Self {
        let primary = code.split(['-', '_']).next().unwrap_or_default();
        if primary.eq_ignore_ascii_case("sw") {
            Language::Sw
        } else {
            Language::En
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Sw => "sw",
        }
    }

    pub fn texts(self) -> &'static Texts {
        match self {
            Language::En => &EN,
            Language::Sw => &SW,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct Texts {
    pub site_title: &'static str,
    pub heading: &'static str,
    pub search_placeholder: &'static str,
    pub no_results: &'static str,
    pub view_profile: &'static str,
    pub contact: &'static str,
    pub contact_message: &'static str,
    pub back_home: &'static str,
    pub tagline: &'static str,
    pub quote_heading: &'static str,
    pub your_name: &'static str,
    pub phone_number: &'static str,
    pub send_quote: &'static str,
    pub thanks_heading: &'static str,
    pub thanks_body: &'static str,
    pub back_start: &'static str,
    pub welcome: &'static str,
}

impl Texts {
    /// Profile text used when a company has no description of its own.
    pub fn fallback_description(&self, name: &str) -> String {
        format!("{} {}.", self.welcome, name)
    }
}

static EN: Texts = Texts {
    site_title: "Solar Tanzania Directory",
    heading: "Find Solar Services in Tanzania",
    search_placeholder: "Search by name, location or service",
    no_results: "No companies match your search.",
    view_profile: "View details →",
    contact: "Chat on WhatsApp",
    contact_message: "Hello, I found you on the Solar Tanzania Directory:",
    back_home: "← Back to home",
    tagline: "Solar energy solutions",
    quote_heading: "Get a free price quotation",
    your_name: "Your name:",
    phone_number: "Phone number:",
    send_quote: "Send me a price",
    thanks_heading: "✅ Thank you!",
    thanks_body: "We have received your details. A solar expert will call you shortly.",
    back_start: "Back to start",
    welcome: "Welcome to quality solar services from",
};

static SW: Texts = Texts {
    site_title: "Solar Tanzania Directory",
    heading: "Pata Huduma za Solar Tanzania",
    search_placeholder: "Tafuta kwa jina, mahali au huduma",
    no_results: "Hakuna kampuni inayolingana na utafutaji wako.",
    view_profile: "Angalia Maelezo →",
    contact: "Ongea kwa WhatsApp",
    contact_message: "Habari, nimewapata kwenye Solar Tanzania Directory:",
    back_home: "← Rudi Nyumbani",
    tagline: "Suluhisho la Nishati ya Jua",
    quote_heading: "Pata Makadirio ya Bei (Quotation) Bure",
    your_name: "Jina lako:",
    phone_number: "Namba ya simu:",
    send_quote: "Nitumie Bei Sasa",
    thanks_heading: "✅ Asante Sana!",
    thanks_body: "Tumepokea taarifa zako. Utapigiwa simu na mtaalamu wa solar hivi punde.",
    back_start: "Rudi Mwanzo",
    welcome: "Karibu kwa huduma bora za Solar kutoka",
};
