//! Built-in site content.

/// Default `site.toml`, written by `ctnatural init` and used when no content
/// file exists.
pub const DEFAULT_SITE_TOML: &str = r##"# CT Natural site configuration

company_name = "CT Natural"
tagline = "Natural spray-on cleaner for contrast in MRI & CT suites"
logo_text = "CTN"
logo = "logo.svg"

[build]
# Output directory for the built site
output = "dist"

# Base URL (for deployment)
base_url = "/"

# Files copied verbatim into the site (logo, PDFs)
public_dir = "public"

# Enable CSS minification
minify = true

[server]
host = "127.0.0.1"

[brand]
primary = "#16a34a"
accent = "#22c55e"

[contact]
email = "hello@ctnatural.example"
phone = "+1 (555) 987-1234"
address = "Haarlem, NL"

[images]
hero = "https://images.unsplash.com/photo-1586773860418-d37222d8fce3?q=80&w=1600&auto=format&fit=crop"
product = "https://images.unsplash.com/photo-1582719478250-c89cae4dc85b?q=80&w=1400&auto=format&fit=crop"

[hero]
headline = "Natural"
emphasis = "spray‑on cleaner"
tail = "for imaging care"
lede = "Designed for MRI and CT environments to simplify contrast cleanup, support patient comfort, and protect sensitive equipment."

[product]
heading = "Made for MRI & CT workflows"
highlights = [
    "Quick spray‑and‑wipe routine for contrast spill cleanup",
    "Residue‑free on tables, coils, pads, and housings",
    "Low‑odor handling that supports patient comfort",
    "Ready‑to‑use bottles; bulk refills available",
]

[docs]
heading = "Documentation at your fingertips"
lede = "Access SDS, IFU, and product data sheets for your compliance workflows."
links = [
    { label = "Download SDS", href = "#" },
    { label = "Spec Sheet", href = "#" },
]

[[badges]]
icon = "shield-check"
label = "Equipment‑safe"

[[badges]]
icon = "microscope"
label = "Lab‑tested"

[[badges]]
icon = "leaf"
label = "Low odor"

[[features]]
icon = "shield-check"
title = "Equipment‑Safe"
description = "Non‑abrasive and materials‑conscious for housings, tables, and accessories common to MRI/CT."

[[features]]
icon = "droplets"
title = "Contrast Cleanup, Simplified"
description = "Cuts through iodinated and gadolinium spill residue with a quick spray‑and‑wipe routine."

[[features]]
icon = "sparkles"
title = "Residue‑Free Finish"
description = "Leaves surfaces clean without sticky films—great for patient‑contact areas."

[[features]]
icon = "clock"
title = "Fast Turnover"
description = "Rapid application supports efficient room turnaround between scans."

[[features]]
icon = "leaf"
title = "Naturally Derived"
description = "Plant‑forward formulation, low odor, and friendly daily handling characteristics."

[[features]]
icon = "factory"
title = "Reliable Supply"
description = "From solo clinics to multi‑site networks—predictable lead times and volume options."

[[testimonials]]
name = "Dr. Elena Park"
role = "Lead Radiographer"
quote = "Room turnover is smoother and the low‑odor profile is a win for patients."

[[testimonials]]
name = "Samir Patel"
role = "Facilities Manager"
quote = "Gentle on panels and pads—no residue under harsh lighting checks."

[[testimonials]]
name = "Maria Gomez"
role = "Clinic Owner"
quote = "The spray format keeps training simple for rotating staff."
"##;
