use super::normalize as n;
use super::rule::FieldRule;

/// Every supported form field, in display order.
pub static FIELD_RULES: [FieldRule; 15] = [
    FieldRule {
        key: "phone",
        label: "Mobile",
        icon: "📱",
        validate: n::contains_digit,
        normalize: n::mobile_number,
        build: n::tel,
    },
    FieldRule {
        key: "telephone",
        label: "Landline",
        icon: "☎",
        validate: n::contains_digit,
        normalize: n::landline_number,
        build: n::tel,
    },
    FieldRule {
        key: "email",
        label: "Email",
        icon: "✉",
        validate: n::looks_like_email,
        normalize: n::keep_as_is,
        build: n::mailto,
    },
    FieldRule {
        key: "whatsapp",
        label: "WhatsApp",
        icon: "WA",
        validate: n::accept_any,
        normalize: n::digits_only,
        build: n::whatsapp,
    },
    FieldRule {
        key: "telegram",
        label: "Telegram",
        icon: "TG",
        validate: n::accept_any,
        normalize: n::strip_handle_prefix,
        build: n::telegram,
    },
    FieldRule {
        key: "snapchat",
        label: "Snapchat",
        icon: "SC",
        validate: n::accept_any,
        normalize: n::strip_handle_prefix,
        build: n::snapchat,
    },
    FieldRule {
        key: "pinterest",
        label: "Pinterest",
        icon: "P",
        validate: n::accept_any,
        normalize: n::strip_handle_prefix,
        build: n::pinterest,
    },
    FieldRule {
        key: "github",
        label: "GitHub",
        icon: "GH",
        validate: n::accept_any,
        normalize: n::strip_handle_prefix,
        build: n::github,
    },
    FieldRule {
        key: "website",
        label: "Website",
        icon: "www",
        validate: n::accept_any,
        normalize: n::keep_as_is,
        build: n::website,
    },
    FieldRule {
        key: "address",
        label: "Maps",
        icon: "📍",
        validate: n::accept_any,
        normalize: n::keep_as_is,
        build: n::maps_search,
    },
    FieldRule {
        key: "facebook",
        label: "Facebook",
        icon: "f",
        validate: n::accept_any,
        normalize: n::keep_as_is,
        build: n::facebook,
    },
    FieldRule {
        key: "youtube",
        label: "YouTube",
        icon: "YT",
        validate: n::accept_any,
        normalize: n::strip_handle_prefix,
        build: n::youtube,
    },
    FieldRule {
        key: "linkedin",
        label: "LinkedIn",
        icon: "in",
        validate: n::accept_any,
        normalize: n::keep_as_is,
        build: n::linkedin,
    },
    FieldRule {
        key: "instagram",
        label: "Instagram",
        icon: "IG",
        validate: n::accept_any,
        normalize: n::strip_handle_prefix,
        build: n::instagram,
    },
    FieldRule {
        key: "twitter",
        label: "Twitter / X",
        icon: "X",
        validate: n::accept_any,
        normalize: n::strip_handle_prefix,
        build: n::twitter,
    },
];
