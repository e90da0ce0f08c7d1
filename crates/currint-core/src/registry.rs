//! Registry of ISO 4217 currencies.
//!
//! The table is built at compile time and never changes, so lookups need no
//! synchronisation. Entries are sorted by code for binary search.
//!
//! # Example
//!
//! ```
//! use currint_core::registry;
//!
//! let usd = registry::get("usd").unwrap();
//! assert_eq!(usd.code(), "USD");
//! assert_eq!(usd.divisor(), 100);
//!
//! assert!(registry::get("QQQ").is_none());
//! ```

use crate::currency::{Currency, MinorUnit};
use crate::error::{CurrencyError, Result};

/// Number of registered currencies.
pub const COUNT: usize = 170;

static CURRENCIES: [Currency; COUNT] = [
    Currency::define("AED", Some("784"), MinorUnit::Exponent(2), "UAE Dirham", ""),
    Currency::define("AFN", Some("971"), MinorUnit::Exponent(2), "Afghani", ""),
    Currency::define("ALL", Some("008"), MinorUnit::Exponent(2), "Lek", ""),
    Currency::define("AMD", Some("051"), MinorUnit::Exponent(2), "Armenian Dram", ""),
    Currency::define("ANG", Some("532"), MinorUnit::Exponent(2), "Netherlands Antillean Guilder", ""),
    Currency::define("AOA", Some("973"), MinorUnit::Exponent(2), "Kwanza", ""),
    Currency::define("ARS", Some("032"), MinorUnit::Exponent(2), "Argentine Peso", ""),
    Currency::define("AUD", Some("036"), MinorUnit::Exponent(2), "Australian Dollar", ""),
    Currency::define("AWG", Some("533"), MinorUnit::Exponent(2), "Aruban Florin", ""),
    Currency::define("AZN", Some("944"), MinorUnit::Exponent(2), "Azerbaijanian Manat", ""),
    Currency::define("BAM", Some("977"), MinorUnit::Exponent(2), "Convertible Mark", ""),
    Currency::define("BBD", Some("052"), MinorUnit::Exponent(2), "Barbados Dollar", ""),
    Currency::define("BDT", Some("050"), MinorUnit::Exponent(2), "Taka", ""),
    Currency::define("BGN", Some("975"), MinorUnit::Exponent(2), "Bulgarian Lev", ""),
    Currency::define("BHD", Some("048"), MinorUnit::Exponent(3), "Bahraini Dinar", ""),
    Currency::define("BIF", Some("108"), MinorUnit::Exponent(0), "Burundi Franc", ""),
    Currency::define("BMD", Some("060"), MinorUnit::Exponent(2), "Bermudian Dollar", ""),
    Currency::define("BND", Some("096"), MinorUnit::Exponent(2), "Brunei Dollar", ""),
    Currency::define("BOB", Some("068"), MinorUnit::Exponent(2), "Boliviano", ""),
    Currency::define("BOV", Some("984"), MinorUnit::Exponent(2), "Mvdol", ""),
    Currency::define("BRL", Some("986"), MinorUnit::Exponent(2), "Brazilian Real", ""),
    Currency::define("BSD", Some("044"), MinorUnit::Exponent(2), "Bahamian Dollar", ""),
    Currency::define("BTN", Some("064"), MinorUnit::Exponent(2), "Ngultrum", ""),
    Currency::define("BWP", Some("072"), MinorUnit::Exponent(2), "Pula", ""),
    Currency::define("BYN", Some("933"), MinorUnit::Exponent(2), "Belarusian Ruble", ""),
    Currency::define("BYR", Some("974"), MinorUnit::Exponent(0), "Belarussian Ruble", ""),
    Currency::define("BZD", Some("084"), MinorUnit::Exponent(2), "Belize Dollar", ""),
    Currency::define("CAD", Some("124"), MinorUnit::Exponent(2), "Canadian Dollar", ""),
    Currency::define("CDF", Some("976"), MinorUnit::Exponent(2), "Congolese Franc", ""),
    Currency::define("CHE", Some("947"), MinorUnit::Exponent(2), "WIR Euro", ""),
    Currency::define("CHF", Some("756"), MinorUnit::Exponent(2), "Swiss Franc", ""),
    Currency::define("CHW", Some("948"), MinorUnit::Exponent(2), "WIR Franc", ""),
    Currency::define("CLF", Some("990"), MinorUnit::Exponent(0), "Unidad de Fomento", ""),
    Currency::define("CLP", Some("152"), MinorUnit::Exponent(0), "Chilean Peso", ""),
    Currency::define("CNY", Some("156"), MinorUnit::Exponent(2), "Yuan Renminbi", ""),
    Currency::define("COP", Some("170"), MinorUnit::Exponent(2), "Colombian Peso", ""),
    Currency::define("COU", Some("970"), MinorUnit::Exponent(2), "Unidad de Valor Real", ""),
    Currency::define("CRC", Some("188"), MinorUnit::Exponent(2), "Costa Rican Colon", ""),
    Currency::define("CUC", Some("931"), MinorUnit::Exponent(2), "Peso Convertible", ""),
    Currency::define("CUP", Some("192"), MinorUnit::Exponent(2), "Cuban Peso", ""),
    Currency::define("CVE", Some("132"), MinorUnit::Exponent(2), "Cape Verde Escudo", ""),
    Currency::define("CZK", Some("203"), MinorUnit::Exponent(2), "Czech Koruna", ""),
    Currency::define("DJF", Some("262"), MinorUnit::Exponent(0), "Djibouti Franc", ""),
    Currency::define("DKK", Some("208"), MinorUnit::Exponent(2), "Danish Krone", ""),
    Currency::define("DOP", Some("214"), MinorUnit::Exponent(2), "Dominican Peso", ""),
    Currency::define("DZD", Some("012"), MinorUnit::Exponent(2), "Algerian Dinar", ""),
    Currency::define("EGP", Some("818"), MinorUnit::Exponent(2), "Egyptian Pound", ""),
    Currency::define("ERN", Some("232"), MinorUnit::Exponent(2), "Nakfa", ""),
    Currency::define("ETB", Some("230"), MinorUnit::Exponent(2), "Ethiopian Birr", ""),
    Currency::define("EUR", Some("978"), MinorUnit::Exponent(2), "Euro", "€"),
    Currency::define("FJD", Some("242"), MinorUnit::Exponent(2), "Fiji Dollar", ""),
    Currency::define("FKP", Some("238"), MinorUnit::Exponent(2), "Falkland Islands Pound", ""),
    Currency::define("GBP", Some("826"), MinorUnit::Exponent(2), "Pound Sterling", "£"),
    Currency::define("GEL", Some("981"), MinorUnit::Exponent(2), "Lari", ""),
    Currency::define("GHS", Some("936"), MinorUnit::Exponent(2), "Ghana Cedi", ""),
    Currency::define("GIP", Some("292"), MinorUnit::Exponent(2), "Gibraltar Pound", ""),
    Currency::define("GMD", Some("270"), MinorUnit::Exponent(2), "Dalasi", ""),
    Currency::define("GNF", Some("324"), MinorUnit::Exponent(0), "Guinea Franc", ""),
    Currency::define("GTQ", Some("320"), MinorUnit::Exponent(2), "Quetzal", ""),
    Currency::define("GYD", Some("328"), MinorUnit::Exponent(2), "Guyana Dollar", ""),
    Currency::define("HKD", Some("344"), MinorUnit::Exponent(2), "Hong Kong Dollar", ""),
    Currency::define("HNL", Some("340"), MinorUnit::Exponent(2), "Lempira", ""),
    Currency::define("HRK", Some("191"), MinorUnit::Exponent(2), "Croatian Kuna", ""),
    Currency::define("HTG", Some("332"), MinorUnit::Exponent(2), "Gourde", ""),
    Currency::define("HUF", Some("348"), MinorUnit::Exponent(2), "Forint", ""),
    Currency::define("IDR", Some("360"), MinorUnit::Exponent(2), "Rupiah", ""),
    Currency::define("ILS", Some("376"), MinorUnit::Exponent(2), "New Israeli Sheqel", ""),
    Currency::define("INR", Some("356"), MinorUnit::Exponent(2), "Indian Rupee", ""),
    Currency::define("IQD", Some("368"), MinorUnit::Exponent(3), "Iraqi Dinar", ""),
    Currency::define("IRR", Some("364"), MinorUnit::Exponent(2), "Iranian Rial", ""),
    Currency::define("ISK", Some("352"), MinorUnit::Exponent(0), "Iceland Krona", ""),
    Currency::define("JMD", Some("388"), MinorUnit::Exponent(2), "Jamaican Dollar", ""),
    Currency::define("JOD", Some("400"), MinorUnit::Exponent(3), "Jordanian Dinar", ""),
    Currency::define("JPY", Some("392"), MinorUnit::Exponent(0), "Yen", ""),
    Currency::define("KES", Some("404"), MinorUnit::Exponent(2), "Kenyan Shilling", ""),
    Currency::define("KGS", Some("417"), MinorUnit::Exponent(2), "Som", ""),
    Currency::define("KHR", Some("116"), MinorUnit::Exponent(2), "Riel", ""),
    Currency::define("KMF", Some("174"), MinorUnit::Exponent(0), "Comoro Franc", ""),
    Currency::define("KPW", Some("408"), MinorUnit::Exponent(2), "North Korean Won", ""),
    Currency::define("KRW", Some("410"), MinorUnit::Exponent(0), "Won", ""),
    Currency::define("KWD", Some("414"), MinorUnit::Exponent(3), "Kuwaiti Dinar", ""),
    Currency::define("KYD", Some("136"), MinorUnit::Exponent(2), "Cayman Islands Dollar", ""),
    Currency::define("KZT", Some("398"), MinorUnit::Exponent(2), "Tenge", ""),
    Currency::define("LAK", Some("418"), MinorUnit::Exponent(2), "Kip", ""),
    Currency::define("LBP", Some("422"), MinorUnit::Exponent(2), "Lebanese Pound", ""),
    Currency::define("LKR", Some("144"), MinorUnit::Exponent(2), "Sri Lanka Rupee", ""),
    Currency::define("LRD", Some("430"), MinorUnit::Exponent(2), "Liberian Dollar", ""),
    Currency::define("LSL", Some("426"), MinorUnit::Exponent(2), "Loti", ""),
    Currency::define("LTL", Some("440"), MinorUnit::Exponent(2), "Lithuanian Litas", ""),
    Currency::define("LYD", Some("434"), MinorUnit::Exponent(3), "Libyan Dinar", ""),
    Currency::define("MAD", Some("504"), MinorUnit::Exponent(2), "Moroccan Dirham", ""),
    Currency::define("MDL", Some("498"), MinorUnit::Exponent(2), "Moldovan Leu", ""),
    Currency::define("MGA", Some("969"), MinorUnit::Divisor(5), "Malagasy Ariary", ""),
    Currency::define("MKD", Some("807"), MinorUnit::Exponent(2), "Denar", ""),
    Currency::define("MMK", Some("104"), MinorUnit::Exponent(2), "Kyat", ""),
    Currency::define("MNT", Some("496"), MinorUnit::Exponent(2), "Tugrik", ""),
    Currency::define("MOP", Some("446"), MinorUnit::Exponent(2), "Pataca", ""),
    Currency::define("MRO", Some("478"), MinorUnit::Divisor(5), "Ouguiya", ""),
    Currency::define("MRU", Some("929"), MinorUnit::Divisor(5), "Ouguiya", ""),
    Currency::define("MUR", Some("480"), MinorUnit::Exponent(2), "Mauritius Rupee", ""),
    Currency::define("MVR", Some("462"), MinorUnit::Exponent(2), "Rufiyaa", ""),
    Currency::define("MWK", Some("454"), MinorUnit::Exponent(2), "Kwacha", ""),
    Currency::define("MXN", Some("484"), MinorUnit::Exponent(2), "Mexican Peso", ""),
    Currency::define("MXV", Some("979"), MinorUnit::Exponent(2), "Mexican Unidad de Inversion (UDI)", ""),
    Currency::define("MYR", Some("458"), MinorUnit::Exponent(2), "Malaysian Ringgit", ""),
    Currency::define("MZN", Some("943"), MinorUnit::Exponent(2), "Mozambique Metical", ""),
    Currency::define("NAD", Some("516"), MinorUnit::Exponent(2), "Namibia Dollar", ""),
    Currency::define("NGN", Some("566"), MinorUnit::Exponent(2), "Naira", ""),
    Currency::define("NIO", Some("558"), MinorUnit::Exponent(2), "Cordoba Oro", ""),
    Currency::define("NOK", Some("578"), MinorUnit::Exponent(2), "Norwegian Krone", ""),
    Currency::define("NPR", Some("524"), MinorUnit::Exponent(2), "Nepalese Rupee", ""),
    Currency::define("NZD", Some("554"), MinorUnit::Exponent(2), "New Zealand Dollar", ""),
    Currency::define("OMR", Some("512"), MinorUnit::Exponent(3), "Rial Omani", ""),
    Currency::define("PAB", Some("590"), MinorUnit::Exponent(2), "Balboa", ""),
    Currency::define("PEN", Some("604"), MinorUnit::Exponent(2), "Nuevo Sol", ""),
    Currency::define("PGK", Some("598"), MinorUnit::Exponent(2), "Kina", ""),
    Currency::define("PHP", Some("608"), MinorUnit::Exponent(2), "Philippine Peso", ""),
    Currency::define("PKR", Some("586"), MinorUnit::Exponent(2), "Pakistan Rupee", ""),
    Currency::define("PLN", Some("985"), MinorUnit::Exponent(2), "Zloty", ""),
    Currency::define("PYG", Some("600"), MinorUnit::Exponent(0), "Guarani", ""),
    Currency::define("QAR", Some("634"), MinorUnit::Exponent(2), "Qatari Rial", ""),
    Currency::define("RON", Some("946"), MinorUnit::Exponent(2), "New Romanian Leu", ""),
    Currency::define("RSD", Some("941"), MinorUnit::Exponent(2), "Serbian Dinar", ""),
    Currency::define("RUB", Some("643"), MinorUnit::Exponent(2), "Russian Ruble", ""),
    Currency::define("RWF", Some("646"), MinorUnit::Exponent(0), "Rwanda Franc", ""),
    Currency::define("SAR", Some("682"), MinorUnit::Exponent(2), "Saudi Riyal", ""),
    Currency::define("SBD", Some("090"), MinorUnit::Exponent(2), "Solomon Islands Dollar", ""),
    Currency::define("SCR", Some("690"), MinorUnit::Exponent(2), "Seychelles Rupee", ""),
    Currency::define("SDG", Some("938"), MinorUnit::Exponent(2), "Sudanese Pound", ""),
    Currency::define("SEK", Some("752"), MinorUnit::Exponent(2), "Swedish Krona", ""),
    Currency::define("SGD", Some("702"), MinorUnit::Exponent(2), "Singapore Dollar", ""),
    Currency::define("SHP", Some("654"), MinorUnit::Exponent(2), "Saint Helena Pound", ""),
    Currency::define("SLL", Some("694"), MinorUnit::Exponent(2), "Leone", ""),
    Currency::define("SOS", Some("706"), MinorUnit::Exponent(2), "Somali Shilling", ""),
    Currency::define("SRD", Some("968"), MinorUnit::Exponent(2), "Surinam Dollar", ""),
    Currency::define("SSP", Some("728"), MinorUnit::Exponent(2), "South Sudanese Pound", ""),
    Currency::define("STD", Some("678"), MinorUnit::Exponent(2), "Dobra", ""),
    Currency::define("STN", Some("930"), MinorUnit::Exponent(2), "Dobra", ""),
    Currency::define("SVC", Some("222"), MinorUnit::Exponent(2), "El Salvador Colon", ""),
    Currency::define("SYP", Some("760"), MinorUnit::Exponent(2), "Syrian Pound", ""),
    Currency::define("SZL", Some("748"), MinorUnit::Exponent(2), "Lilangeni", ""),
    Currency::define("THB", Some("764"), MinorUnit::Exponent(2), "Baht", ""),
    Currency::define("TJS", Some("972"), MinorUnit::Exponent(2), "Somoni", ""),
    Currency::define("TMT", Some("934"), MinorUnit::Exponent(2), "Turkmenistan New Manat", ""),
    Currency::define("TND", Some("788"), MinorUnit::Exponent(3), "Tunisian Dinar", ""),
    Currency::define("TOP", Some("776"), MinorUnit::Exponent(2), "Pa'anga", ""),
    Currency::define("TRY", Some("949"), MinorUnit::Exponent(2), "Turkish Lira", ""),
    Currency::define("TTD", Some("780"), MinorUnit::Exponent(2), "Trinidad and Tobago Dollar", ""),
    Currency::define("TWD", Some("901"), MinorUnit::Exponent(2), "New Taiwan Dollar", ""),
    Currency::define("TZS", Some("834"), MinorUnit::Exponent(2), "Tanzanian Shilling", ""),
    Currency::define("UAH", Some("980"), MinorUnit::Exponent(2), "Hryvnia", ""),
    Currency::define("UGX", Some("800"), MinorUnit::Exponent(0), "Uganda Shilling", ""),
    Currency::define("USD", Some("840"), MinorUnit::Exponent(2), "US Dollar", "$"),
    Currency::define("UYI", Some("940"), MinorUnit::Exponent(0), "Uruguay Peso en Unidades Indexadas (URUIURUI)", ""),
    Currency::define("UYU", Some("858"), MinorUnit::Exponent(2), "Peso Uruguayo", ""),
    Currency::define("UZS", Some("860"), MinorUnit::Exponent(2), "Uzbekistan Sum", ""),
    Currency::define("VEF", Some("937"), MinorUnit::Exponent(2), "Bolivar", ""),
    Currency::define("VES", Some("928"), MinorUnit::Exponent(2), "Bolívar Soberano", ""),
    Currency::define("VND", Some("704"), MinorUnit::Exponent(0), "Dong", ""),
    Currency::define("VUV", Some("548"), MinorUnit::Exponent(0), "Vatu", ""),
    Currency::define("WST", Some("882"), MinorUnit::Exponent(2), "Tala", ""),
    Currency::define("XAF", Some("950"), MinorUnit::Exponent(0), "CFA Franc BEAC", ""),
    Currency::define("XBT", None, MinorUnit::Exponent(8), "Bitcoin", ""),
    Currency::define("XCD", Some("951"), MinorUnit::Exponent(2), "East Caribbean Dollar", ""),
    Currency::define("XOF", Some("952"), MinorUnit::Exponent(0), "CFA Franc BCEAO", ""),
    Currency::define("XPF", Some("953"), MinorUnit::Exponent(0), "CFP Franc", ""),
    Currency::define("YER", Some("886"), MinorUnit::Exponent(2), "Yemeni Rial", ""),
    Currency::define("ZAR", Some("710"), MinorUnit::Exponent(2), "Rand", ""),
    Currency::define("ZMW", Some("967"), MinorUnit::Exponent(2), "Zambian Kwacha", ""),
    Currency::define("ZWL", Some("932"), MinorUnit::Exponent(2), "Zimbabwe Dollar", ""),
];

/// Look up a currency by code, ignoring case.
#[must_use]
pub fn get(code: &str) -> Option<&'static Currency> {
    let code = code.trim().to_ascii_uppercase();
    CURRENCIES
        .binary_search_by(|c| c.code().cmp(code.as_str()))
        .ok()
        .map(|i| &CURRENCIES[i])
}

/// Look up a currency by code, failing with
/// [`CurrencyError::UnknownCurrency`] when it is not registered.
pub fn lookup(code: &str) -> Result<&'static Currency> {
    get(code).ok_or_else(|| CurrencyError::UnknownCurrency(code.to_string()))
}

/// Look up a currency by its ISO numeric code, e.g. `"826"`.
#[must_use]
pub fn by_numeric_code(numeric_code: &str) -> Option<&'static Currency> {
    CURRENCIES
        .iter()
        .find(|c| c.numeric_code() == Some(numeric_code))
}

/// All registered currencies, in code order.
pub fn all() -> impl ExactSizeIterator<Item = &'static Currency> {
    CURRENCIES.iter()
}
