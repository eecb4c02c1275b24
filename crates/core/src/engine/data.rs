//! Embedded CLDR-derived locale data backing [`super::BuiltinEngine`].
//!
//! A practical subset: number symbols, the standard currency pattern,
//! currency display names, and territory names for a handful of locales,
//! plus the global currency→territory table, per-currency fraction digits,
//! and the symbol table. Locale lookups resolve through the parent
//! language and finally `en`.

/// Per-locale data block.
pub(super) struct LocaleTable {
    pub id: &'static str,
    pub decimal: &'static str,
    pub group: &'static str,
    pub minus: &'static str,
    pub currency_pattern: &'static str,
    pub currency_names: &'static [(&'static str, &'static str)],
    pub territory_names: &'static [(&'static str, &'static str)],
}

pub(super) static LOCALES: &[LocaleTable] = &[
    LocaleTable {
        id: "en",
        decimal: ".",
        group: ",",
        minus: "-",
        currency_pattern: "\u{a4}#,##0.00",
        currency_names: &[
            ("USD", "US Dollar"),
            ("EUR", "Euro"),
            ("JPY", "Japanese Yen"),
            ("GBP", "British Pound"),
            ("IDR", "Indonesian Rupiah"),
            ("INR", "Indian Rupee"),
            ("AUD", "Australian Dollar"),
            ("CAD", "Canadian Dollar"),
            ("CHF", "Swiss Franc"),
            ("CNY", "Chinese Yuan"),
            ("SEK", "Swedish Krona"),
            ("NOK", "Norwegian Krone"),
            ("DKK", "Danish Krone"),
            ("KRW", "South Korean Won"),
            ("BHD", "Bahraini Dinar"),
            ("KWD", "Kuwaiti Dinar"),
            ("TND", "Tunisian Dinar"),
            ("BRL", "Brazilian Real"),
            ("MXN", "Mexican Peso"),
            ("RUB", "Russian Ruble"),
            ("ZAR", "South African Rand"),
            ("SGD", "Singapore Dollar"),
            ("NZD", "New Zealand Dollar"),
            ("PLN", "Polish Zloty"),
            ("TRY", "Turkish Lira"),
            ("DEM", "German Mark"),
            ("FRF", "French Franc"),
            ("ITL", "Italian Lira"),
            ("NLG", "Dutch Guilder"),
            ("ZWD", "Zimbabwean Dollar (1980\u{2013}2008)"),
            ("ZWR", "Zimbabwean Dollar (2008)"),
            ("MZM", "Mozambican Metical (1980\u{2013}2006)"),
            ("XAU", "Gold"),
            ("XAG", "Silver"),
            ("XDR", "Special Drawing Rights"),
            ("XOF", "West African CFA Franc"),
            ("XAF", "Central African CFA Franc"),
            ("XPF", "CFP Franc"),
        ],
        territory_names: &[
            ("US", "United States"),
            ("EC", "Ecuador"),
            ("SV", "El Salvador"),
            ("PA", "Panama"),
            ("PR", "Puerto Rico"),
            ("DE", "Germany"),
            ("FR", "France"),
            ("ES", "Spain"),
            ("IT", "Italy"),
            ("NL", "Netherlands"),
            ("AT", "Austria"),
            ("BE", "Belgium"),
            ("FI", "Finland"),
            ("GR", "Greece"),
            ("IE", "Ireland"),
            ("PT", "Portugal"),
            ("LU", "Luxembourg"),
            ("JP", "Japan"),
            ("GB", "United Kingdom"),
            ("ID", "Indonesia"),
            ("IN", "India"),
            ("AU", "Australia"),
            ("CA", "Canada"),
            ("CH", "Switzerland"),
            ("LI", "Liechtenstein"),
            ("CN", "China"),
            ("SE", "Sweden"),
            ("NO", "Norway"),
            ("DK", "Denmark"),
            ("KR", "South Korea"),
            ("BH", "Bahrain"),
            ("KW", "Kuwait"),
            ("TN", "Tunisia"),
            ("BR", "Brazil"),
            ("MX", "Mexico"),
            ("RU", "Russia"),
            ("ZA", "South Africa"),
            ("SG", "Singapore"),
            ("NZ", "New Zealand"),
            ("PL", "Poland"),
            ("TR", "Turkey"),
            ("ZW", "Zimbabwe"),
            ("MZ", "Mozambique"),
            ("SN", "Senegal"),
            ("CM", "Cameroon"),
            ("PF", "French Polynesia"),
        ],
    },
    // Inherits names from "en"; overrides the grouping pattern.
    LocaleTable {
        id: "en_IN",
        decimal: ".",
        group: ",",
        minus: "-",
        currency_pattern: "\u{a4}#,##,##0.00",
        currency_names: &[],
        territory_names: &[],
    },
    LocaleTable {
        id: "de",
        decimal: ",",
        group: ".",
        minus: "-",
        currency_pattern: "#,##0.00\u{a0}\u{a4}",
        currency_names: &[
            ("USD", "US-Dollar"),
            ("EUR", "Euro"),
            ("JPY", "Japanischer Yen"),
            ("GBP", "Britisches Pfund"),
            ("CHF", "Schweizer Franken"),
            ("DEM", "Deutsche Mark"),
        ],
        territory_names: &[
            ("US", "Vereinigte Staaten"),
            ("DE", "Deutschland"),
            ("FR", "Frankreich"),
            ("JP", "Japan"),
            ("CH", "Schweiz"),
            ("AT", "\u{d6}sterreich"),
            ("GB", "Vereinigtes K\u{f6}nigreich"),
        ],
    },
    LocaleTable {
        id: "fr",
        decimal: ",",
        group: "\u{202f}",
        minus: "-",
        currency_pattern: "#,##0.00\u{a0}\u{a4}",
        currency_names: &[
            ("USD", "dollar des \u{c9}tats-Unis"),
            ("EUR", "euro"),
            ("JPY", "yen japonais"),
            ("FRF", "franc fran\u{e7}ais"),
        ],
        territory_names: &[
            ("US", "\u{c9}tats-Unis"),
            ("FR", "France"),
            ("DE", "Allemagne"),
            ("JP", "Japon"),
            ("BE", "Belgique"),
            ("CH", "Suisse"),
        ],
    },
    LocaleTable {
        id: "es",
        decimal: ",",
        group: ".",
        minus: "-",
        currency_pattern: "#,##0.00\u{a0}\u{a4}",
        currency_names: &[
            ("USD", "d\u{f3}lar estadounidense"),
            ("EUR", "euro"),
            ("JPY", "yen japon\u{e9}s"),
        ],
        territory_names: &[
            ("US", "Estados Unidos"),
            ("ES", "Espa\u{f1}a"),
            ("MX", "M\u{e9}xico"),
        ],
    },
    LocaleTable {
        id: "id",
        decimal: ",",
        group: ".",
        minus: "-",
        currency_pattern: "\u{a4}#,##0.00",
        currency_names: &[
            ("USD", "Dolar Amerika Serikat"),
            ("EUR", "Euro"),
            ("JPY", "Yen Jepang"),
            ("IDR", "Rupiah Indonesia"),
        ],
        territory_names: &[
            ("US", "Amerika Serikat"),
            ("ID", "Indonesia"),
            ("JP", "Jepang"),
        ],
    },
    LocaleTable {
        id: "ja",
        decimal: ".",
        group: ",",
        minus: "-",
        currency_pattern: "\u{a4}#,##0.00",
        currency_names: &[
            ("USD", "\u{7c73}\u{30c9}\u{30eb}"),
            ("EUR", "\u{30e6}\u{30fc}\u{30ed}"),
            ("JPY", "\u{65e5}\u{672c}\u{5186}"),
        ],
        territory_names: &[
            ("US", "\u{30a2}\u{30e1}\u{30ea}\u{30ab}\u{5408}\u{8846}\u{56fd}"),
            ("JP", "\u{65e5}\u{672c}"),
            ("DE", "\u{30c9}\u{30a4}\u{30c4}"),
        ],
    },
    LocaleTable {
        id: "sv",
        decimal: ",",
        group: "\u{a0}",
        minus: "\u{2212}",
        currency_pattern: "#,##0.00\u{a0}\u{a4}",
        currency_names: &[
            ("USD", "US-dollar"),
            ("EUR", "euro"),
            ("JPY", "japansk yen"),
            ("SEK", "svensk krona"),
        ],
        territory_names: &[
            ("US", "USA"),
            ("SE", "Sverige"),
            ("DE", "Tyskland"),
        ],
    },
];

/// Global currency → territory-code table.
pub(super) static CURRENCY_TERRITORIES: &[(&str, &[&str])] = &[
    ("AUD", &["AU"]),
    ("BHD", &["BH"]),
    ("BRL", &["BR"]),
    ("CAD", &["CA"]),
    ("CHF", &["CH", "LI"]),
    ("CNY", &["CN"]),
    ("DEM", &["DE"]),
    ("DKK", &["DK"]),
    ("EUR", &["DE", "FR", "ES", "IT", "NL", "AT", "BE", "FI", "GR", "IE", "PT", "LU"]),
    ("FRF", &["FR"]),
    ("GBP", &["GB"]),
    ("IDR", &["ID"]),
    ("INR", &["IN"]),
    ("ITL", &["IT"]),
    ("JPY", &["JP"]),
    ("KRW", &["KR"]),
    ("KWD", &["KW"]),
    ("MXN", &["MX"]),
    ("MZM", &["MZ"]),
    ("NLG", &["NL"]),
    ("NOK", &["NO"]),
    ("NZD", &["NZ"]),
    ("PLN", &["PL"]),
    ("RUB", &["RU"]),
    ("SEK", &["SE"]),
    ("SGD", &["SG"]),
    ("TND", &["TN"]),
    ("TRY", &["TR"]),
    ("USD", &["US", "EC", "SV", "PA", "PR"]),
    ("XAF", &["CM"]),
    ("XAG", &[]),
    ("XAU", &[]),
    ("XDR", &[]),
    ("XOF", &["SN"]),
    ("XPF", &["PF"]),
    ("ZAR", &["ZA"]),
    ("ZWD", &["ZW"]),
    ("ZWR", &["ZW"]),
];

/// Currency symbol table. Codes absent here display as their alpha code.
pub(super) static CURRENCY_SYMBOLS: &[(&str, &str)] = &[
    ("AUD", "A$"),
    ("BRL", "R$"),
    ("CAD", "CA$"),
    ("CNY", "CN\u{a5}"),
    ("EUR", "\u{20ac}"),
    ("GBP", "\u{a3}"),
    ("IDR", "Rp"),
    ("INR", "\u{20b9}"),
    ("JPY", "\u{a5}"),
    ("KRW", "\u{20a9}"),
    ("MXN", "MX$"),
    ("NZD", "NZ$"),
    ("PLN", "z\u{142}"),
    ("RUB", "\u{20bd}"),
    ("SEK", "kr"),
    ("NOK", "kr"),
    ("DKK", "kr"),
    ("SGD", "S$"),
    ("TRY", "\u{20ba}"),
    ("USD", "$"),
    ("ZAR", "R"),
];

/// Currencies rendered with no fraction digits.
pub(super) static ZERO_DIGIT_CURRENCIES: &[&str] =
    &["ITL", "JPY", "KRW", "XAF", "XOF", "XPF"];

/// Currencies rendered with three fraction digits.
pub(super) static THREE_DIGIT_CURRENCIES: &[&str] = &["BHD", "KWD", "TND"];
