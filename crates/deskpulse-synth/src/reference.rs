//! Fixed reference tables driving synthetic generation
//!
//! Names and weights mirror the live support desk closely enough that the
//! backfilled fixtures exercise the same dashboard layouts as real data.

/// Typical weekly ticket volume the generators vary around.
pub const BASELINE_WEEKLY_TOTAL: u64 = 350;

/// Product line with relative ticket-volume weights.
pub const PRODUCTS: [(&str, u64); 10] = [
    ("RIFT", 18),
    ("RIFT 2", 22),
    ("RIFT MINI", 12),
    ("RIFT LIVE", 8),
    ("RIFT GO", 10),
    ("RIFT CAB", 4),
    ("RIFT NEO", 5),
    ("RIFT LINK", 3),
    ("RIFT EDGE", 3),
    ("FORGE X", 6),
];

/// Ticket types with relative weights.
pub const TICKET_TYPES: [(&str, u64); 8] = [
    ("Troubleshooting", 50),
    ("Refund / Replacement Request", 14),
    ("Order Related", 10),
    ("Product Spec", 7),
    ("Product Registration", 5),
    ("Manage My Account", 5),
    ("Edit Contact Information", 3),
    ("Delete / Migrate Account", 3),
];

/// Tally paths sampled into per-product top-issue lists.
pub const TALLY_TEMPLATES: [&str; 13] = [
    "Troubleshooting > Software / App > Unlisted Issue Report",
    "Troubleshooting > Power / Battery > Not Powering On",
    "Troubleshooting > Bluetooth / Wireless > Cannot Connect To Device",
    "Troubleshooting > Hardware > Physical Controls / Parts",
    "Troubleshooting > Sound > Hum Noise",
    "Purchase Inquiry > Order / Shipping > Track Order Status",
    "Post-Sales > Return / Refund Request > Refund Request",
    "Product Inquiry > Specs > Supported Formats",
    "Website > Product Registration > Cannot Register Successfully",
    "Warranty > Warranty > Warranty Service Followup",
    "Troubleshooting > Bluetooth / Wireless > No Bluetooth Connection",
    "Troubleshooting > Hardware > Usb Cannot Be Detected",
    "Post-Sales > Service Parts Request > Others",
];

/// Agent roster with baseline (assigned, replies) weekly activity.
pub const AGENTS: [(&str, u64, u64); 8] = [
    ("Nova (AI)", 180, 350),
    ("Marcus", 60, 70),
    ("Priya", 45, 50),
    ("Anneli", 35, 40),
    ("Elena", 20, 22),
    ("Ryo", 18, 28),
    ("Ernest", 4, 10),
    ("Dana", 3, 1),
];

/// Tracker issues cycled through the weekly issue lists: (key, summary,
/// affected product).
pub const TRACKED_ISSUES: [(&str, &str, &str); 10] = [
    ("SUP-414", "Rift - USB compatibility issue with macOS 26", "Hardware"),
    (
        "SUP-338",
        "Rift Neo - TX does not automatically connect to the RX",
        "Hardware",
    ),
    (
        "SUP-421",
        "Forge X 1.0.0 - Plugin crash in Cubase / Logic Pro",
        "Forge Desktop",
    ),
    (
        "SUP-270",
        "Rift 2 - Cannot change tone or preset via the companion app",
        "",
    ),
    (
        "SUP-211",
        "Rift app - Artist preset pack tag disappeared (iOS only)",
        "",
    ),
    (
        "SUP-358",
        "Rift app - Groove looper drifts out of sync (Rift 2)",
        "Rift",
    ),
    (
        "SUP-226",
        "Rift app - Preset restore issue across platforms",
        "",
    ),
    (
        "SUP-442",
        "Rift app 4.5.1 - Frozen after connecting to amp (iOS only)",
        "Rift",
    ),
    (
        "SUP-477",
        "Rift app 4.5.1 - Cloud backup fail error (Android only)",
        "",
    ),
    (
        "SUP-220",
        "Rift app - Hardware preset saving issue (Android)",
        "",
    ),
];

/// Tracker statuses in circulation for open issues.
pub const ISSUE_STATUSES: [&str; 2] = ["To Do", "In Review"];

/// Products covered by the QA test programme.
pub const QA_PRODUCTS: [&str; 3] = ["Rift", "Forge X", "Relay"];

/// QA tracker project prefixes.
pub const QA_PROJECTS: [&str; 3] = ["RFW", "FGX", "RLY"];

/// Verbatim comment samples for negative satisfaction ratings.
pub const CSAT_SAMPLES: [&str; 10] = [
    "I don't like wasting time with AI responses.",
    "The AI reply only vaguely answered my question.",
    "You answered my question with AI and not a real person.",
    "The bot did not respond to my questions and simply reused my words.",
    "Friendly AI bot, but it wasted my time.",
    "I received what sounded like an AI response that did not resolve the problem.",
    "The support from your AI was fine but the problem was not solved.",
    "Your AI did not even acknowledge what I asked it.",
    "Impressive for an AI but these issues should have been easier.",
    "Started well with the bot, went downhill after that.",
];

/// Base of the rating-review URLs attached to CSAT samples.
pub const RATINGS_URL_BASE: &str = "https://support.riftaudio.com/api/v2/satisfaction_ratings";
