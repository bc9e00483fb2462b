//! The vocabulary table compiled into the binary.

/// `(term, definition)` pairs in their canonical order.
pub(crate) const BUILTIN_ENTRIES: &[(&str, &str)] = &[
    (
        "apogee",
        "1. The point in orbit farthest from the earth. 2. The highest point; culmination; apex.",
    ),
    (
        "exhume",
        "1. To dig out of the ground or from a grave; to disinter.",
    ),
    (
        "geocentric",
        "1. Measured from the earth’s center. 2. Having the earth as a center.",
    ),
    (
        "humus",
        "Rich, dark organic material formed by decay of vegetable matter, essential to soil's fertility.",
    ),
    (
        "inter",
        "To bury; to place in a grave.",
    ),
    (
        "mountebank",
        "A trickster or swindler; a charlatan.",
    ),
    (
        "paramount",
        "Of chief importance; primary; foremost.",
    ),
    (
        "pastoral",
        "1. Pertaining to a Christian minister. 2. Referring to life in the country. 3. Idealized rural life.",
    ),
    (
        "perigee",
        "The point in orbit closest to the earth.",
    ),
    (
        "promontory",
        "A high ridge of land or rock jutting into a body of water; a headland.",
    ),
    (
        "repast",
        "A meal; food served at a meal.",
    ),
    (
        "rustic",
        "1. Typical of country life and people; simple; rough. 2. A rural person.",
    ),
    (
        "rusticate",
        "1. To go to the country. 2. To cause to become rustic.",
    ),
    (
        "terracotta",
        "1. Ceramic clay used in pottery, statuary, and construction. 2. Reddish brown color of the clay.",
    ),
    (
        "terrestrial",
        "1. Pertaining to the earth and its inhabitants. 2. Referring to land as distinct from water or air.",
    ),
    (
        "pusillanimous",
        "Cowardly; fearful.",
    ),
    (
        "ether",
        "1. Regions of space beyond earth’s atmosphere. 2. A flammable liquid anesthetic.",
    ),
    (
        "ethereal",
        "1. Spiritlike in lightness and delicacy. 2. Heavenly; celestial.",
    ),
    (
        "diaphanous",
        "Allowing light to show through; translucent; delicate.",
    ),
    (
        "aspiration",
        "1. Strong desire for achievement. 2. Expulsion of breath in speaking.",
    ),
    (
        "dispirited",
        "Dejected; discouraged; gloomy.",
    ),
    (
        "hyperbole",
        "An exaggeration; a figure expressing excess.",
    ),
    (
        "hyperborean",
        "1. Far north; Arctic. 2. Very cold; frigid.",
    ),
    (
        "hyperventilation",
        "The condition of taking abnormally fast, deep breaths.",
    ),
    (
        "epiphany",
        "1. A revelatory manifestation of a divine being. 2. A sudden insight or realization.",
    ),
    (
        "equanimity",
        "Composure and calm in stressful conditions; equilibrium.",
    ),
    (
        "animus",
        "A powerful feeling of hostility or antagonism; hatred.",
    ),
    (
        "phantasmic",
        "Ghostly; illusory.",
    ),
    (
        "inspirit",
        "To infuse with spirit or life.",
    ),
    (
        "aspire",
        "To have a strong desire to get or do something; to seek.",
    ),
];
