//! Closed lists accepted by address and birth detail fields

use once_cell::sync::Lazy;
use std::collections::HashSet;

/// The country name that marks an Australian address
pub const AUSTRALIA: &str = "Australia";

/// Countries accepted as a country of birth or address country
pub const COUNTRIES: &[&str] = &[
    "Afghanistan", "Aland Islands", "Albania", "Algeria", "American Samoa",
    "Andorra", "Angola", "Anguilla", "Antarctica", "Antigua And Barbuda",
    "Argentina", "Armenia", "Aruba", "Australia", "Austria",
    "Azerbaijan", "Bahamas", "Bahrain", "Bangladesh", "Barbados",
    "Belarus", "Belgium", "Belize", "Benin", "Bermuda",
    "Bhutan", "Bolivia", "Bonaire, Sint Eustatius And Saba", "Bosnia And Herzegovina", "Botswana",
    "Bouvet Island", "Brazil", "British Indian Ocean Territory", "Brunei Darussalam", "Bulgaria",
    "Burkina Faso", "Burundi", "Cambodia", "Cameroon", "Canada",
    "Cape Verde", "Cayman Islands", "Central African Republic", "Chad", "Chile",
    "China", "Christmas Island", "Cocos (Keeling) Islands", "Colombia", "Comoros",
    "Congo", "Congo, The Democratic Republic Of The", "Cook Islands", "Costa Rica", "Cote D'Ivoire",
    "Croatia", "Cuba", "Curacao", "Cyprus", "Czech Republic",
    "Denmark", "Djibouti", "Dominica", "Dominican Republic", "Ecuador",
    "Egypt", "El Salvador", "Equatorial Guinea", "Eritrea", "Estonia",
    "Ethiopia", "Falkland Islands (Malvinas)", "Faroe Islands", "Fiji", "Finland",
    "France", "French Guiana", "French Polynesia", "French Southern Territories", "Gabon",
    "Gambia", "Georgia", "Germany", "Ghana", "Gibraltar",
    "Greece", "Greenland", "Grenada", "Guadeloupe", "Guam",
    "Guatemala", "Guernsey", "Guinea", "Guinea-Bissau", "Guyana",
    "Haiti", "Heard Island And Mcdonald Islands", "Holy See (Vatican City State)", "Honduras", "Hong Kong",
    "Hungary", "Iceland", "India", "Indonesia", "Iran, Islamic Republic Of",
    "Iraq", "Ireland", "Isle Of Man", "Israel", "Italy",
    "Jamaica", "Japan", "Jersey", "Jordan", "Kazakhstan",
    "Kenya", "Kiribati", "Korea, Democratic People's Republic Of", "Korea, Republic Of", "Kuwait",
    "Kyrgyzstan", "Lao People's Democratic Republic", "Latvia", "Lebanon", "Lesotho",
    "Liberia", "Libyan Arab Jamahiriya", "Liechtenstein", "Lithuania", "Luxembourg",
    "Macao", "Macedonia", "Madagascar", "Malawi", "Malaysia",
    "Maldives", "Mali", "Malta", "Marshall Islands", "Martinique",
    "Mauritania", "Mauritius", "Mayotte", "Mexico", "Micronesia",
    "Moldova, Republic Of", "Monaco", "Mongolia", "Montenegro", "Montserrat",
    "Morocco", "Mozambique", "Myanmar", "Namibia", "Nauru",
    "Nepal", "Netherlands", "New Caledonia", "New Zealand", "Nicaragua",
    "Niger", "Nigeria", "Niue", "Norfolk Island", "Northern Ireland",
    "Northern Mariana Islands", "Norway", "Oman", "Pakistan", "Palau",
    "Palestinian Territory, OCC", "Panama", "Papua New Guinea", "Paraguay", "Peru",
    "Philippines", "Pitcairn", "Poland", "Portugal", "Puerto Rico",
    "Qatar", "Reunion", "Romania", "Russian Federation", "Rwanda",
    "Saint Barthelemy", "Saint Helena, Ascension and Tristan Da Cunha", "Saint Kitts And Nevis", "Saint Lucia", "Saint Martin (French Part)",
    "Saint Pierre And Miquelon", "Saint Vincent And The Grenadines", "Samoa", "San Marino", "Sao Tome And Principe",
    "Saudi Arabia", "Senegal", "Serbia", "Seychelles", "Sierra Leone",
    "Singapore", "Sint Maarten (Dutch Part)", "Slovakia", "Slovenia", "Solomon Islands",
    "Somalia", "South Africa", "South Georgia and the South Sandwich Islands", "Spain", "Sri Lanka",
    "Sudan", "Suriname", "Svalbard And Jan Mayen", "Swaziland", "Sweden",
    "Switzerland", "Syrian Arab Republic", "Taiwan", "Tajikistan", "Tanzania, United Republic Of",
    "Thailand", "Timor-Leste", "Togo", "Tokelau", "Tonga",
    "Trinidad And Tobago", "Tunisia", "Turkey", "Turkmenistan", "Turks And Caicos Islands",
    "Tuvalu", "Uganda", "Ukraine", "United Arab Emirates", "United Kingdom",
    "United States", "United States Minor Outlying Islands", "Unknown", "Uruguay", "Uzbekistan",
    "Vanuatu", "Venezuela, Bolivarian Republic", "Viet Nam", "Virgin Islands, British", "Virgin Islands, U.S.",
    "Wallis And Futuna", "Western Sahara", "Yemen", "Zambia", "Zimbabwe",
];

/// Street type abbreviations accepted in structured addresses
pub const STREET_TYPES: &[&str] = &[
    "Accs", "Cres", "Gdns", "Pkwy", "Spur", "Ally", "Cres E", "Gld",
    "Pl", "Sq", "Ambl", "Cres N", "Glen", "Pl E", "Sq E", "App",
    "Cres S", "Gly", "Pl N", "Sq N", "Arc", "Cres W", "Gr", "Pl S",
    "Sq S", "Art", "Crs", "Gr E", "Pl W", "Sq W", "Ave", "Crss",
    "Gr N", "Plza", "St", "Ave Cn", "Crss W", "GrS", "Pnt", "St Cn",
    "Ave E", "Crst", "Gra", "Port", "St E", "Ave Ex", "CSO", "Grn",
    "Prom", "St Ex", "Ave N", "Ct", "Gte", "Qdrt", "St N", "Ave S",
    "Ct E", "Hill", "Quad", "St S", "Ave W", "Ct N", "Hts", "Qy",
    "St W", "Bch", "Cts", "Hwy", "Qy E", "Stps", "Bdwy", "Ct W",
    "Hwy E", "Qy W", "Strp", "Bend", "Ctr", "Hwy N", "Qys", "Tarn",
    "Brae", "Cttg", "Hwy S", "Ramp", "Tce", "Brce", "Ctyd", "Hwy W",
    "Rch", "Tce E", "Brk", "Dale", "Jnc", "Rd", "Tce Ex", "Brow",
    "Dell", "Key", "Rd Cn", "Tce N", "Bvd", "Devn", "Lane", "Rd E",
    "Tce S", "Bvd E", "Dr", "Lane E", "Rd Ex", "Tce W", "Bvd S", "Dr E",
    "Lane N", "Rd Lr", "Top", "Bvd W", "Dr N", "Lane S", "Rd N", "Tor",
    "Bypa", "Dr S", "Lane W", "Rd S", "Trk", "Caus", "Dr W", "Line",
    "Rd W", "Trk E", "Cct", "Drwy", "Link", "Rdge", "Trl", "Cct E",
    "Edge", "Lkt", "Rds", "Turn", "Cct W", "Elb", "Lnwy", "Rdwy",
    "Vale", "Ch", "End", "Loop", "Res", "View", "Cir", "Ent",
    "Mall", "Rest", "Vsta", "Cir N", "Esp", "Mews", "Ride", "Walk",
    "Cir S", "Esp N", "Mndr", "Ring", "Walk N", "Cl", "Esp S", "Mwy",
    "Rise", "Walk S", "Cl N", "Est", "Nook", "Rmbl", "Way", "Cl S",
    "Fawy", "Otlk", "Rnd", "Way E", "Clt", "Fitr", "Park", "Rnge",
    "Way N", "Cmmn", "Flat", "Pass", "Row", "Way S", "Cnr", "Folw",
    "Path", "Rte", "Way W", "Con", "Frnt", "Pde", "Rtt", "Whrf",
    "Cove", "Frtg", "Pde E", "Run", "Wkwy", "Cps", "Fshr", "Pde N",
    "Rvr", "Wynd", "Crcs", "Ftrk", "Pde S", "SWy", "Crcs E", "Fwy",
    "Pde W", "Sbwy", "Crcs W", "Gap", "Pkt", "Slpe",
];

static COUNTRY_SET: Lazy<HashSet<&'static str>> = Lazy::new(|| COUNTRIES.iter().copied().collect());

static STREET_TYPE_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| STREET_TYPES.iter().copied().collect());

/// Whether `name` (trimmed, exact case) is a listed country
pub fn is_country(name: &str) -> bool {
    COUNTRY_SET.contains(name.trim())
}

/// Whether `street_type` (trimmed, exact case) is a listed street type
pub fn is_street_type(street_type: &str) -> bool {
    STREET_TYPE_SET.contains(street_type.trim())
}
