use super::Country;

/// Countries indexed by the id stored in country, region and city databases
pub(crate) const COUNTRIES: [Country; 256] = [
    Country::new("--", "--", "N/A", "--"),
    Country::new("AP", "AP", "Asia/Pacific Region", "AS"),
    Country::new("EU", "EU", "Europe", "EU"),
    Country::new("AD", "AND", "Andorra", "EU"),
    Country::new("AE", "ARE", "United Arab Emirates", "AS"),
    Country::new("AF", "AFG", "Afghanistan", "AS"),
    Country::new("AG", "ATG", "Antigua and Barbuda", "NA"),
    Country::new("AI", "AIA", "Anguilla", "NA"),
    Country::new("AL", "ALB", "Albania", "EU"),
    Country::new("AM", "ARM", "Armenia", "AS"),
    Country::new("CW", "CUW", "Curacao", "NA"),
    Country::new("AO", "AGO", "Angola", "AF"),
    Country::new("AQ", "ATA", "Antarctica", "AN"),
    Country::new("AR", "ARG", "Argentina", "SA"),
    Country::new("AS", "ASM", "American Samoa", "OC"),
    Country::new("AT", "AUT", "Austria", "EU"),
    Country::new("AU", "AUS", "Australia", "OC"),
    Country::new("AW", "ABW", "Aruba", "NA"),
    Country::new("AZ", "AZE", "Azerbaijan", "AS"),
    Country::new("BA", "BIH", "Bosnia and Herzegovina", "EU"),
    Country::new("BB", "BRB", "Barbados", "NA"),
    Country::new("BD", "BGD", "Bangladesh", "AS"),
    Country::new("BE", "BEL", "Belgium", "EU"),
    Country::new("BF", "BFA", "Burkina Faso", "AF"),
    Country::new("BG", "BGR", "Bulgaria", "EU"),
    Country::new("BH", "BHR", "Bahrain", "AS"),
    Country::new("BI", "BDI", "Burundi", "AF"),
    Country::new("BJ", "BEN", "Benin", "AF"),
    Country::new("BM", "BMU", "Bermuda", "NA"),
    Country::new("BN", "BRN", "Brunei Darussalam", "AS"),
    Country::new("BO", "BOL", "Bolivia", "SA"),
    Country::new("BR", "BRA", "Brazil", "SA"),
    Country::new("BS", "BHS", "Bahamas", "NA"),
    Country::new("BT", "BTN", "Bhutan", "AS"),
    Country::new("BV", "BVT", "Bouvet Island", "AN"),
    Country::new("BW", "BWA", "Botswana", "AF"),
    Country::new("BY", "BLR", "Belarus", "EU"),
    Country::new("BZ", "BLZ", "Belize", "NA"),
    Country::new("CA", "CAN", "Canada", "NA"),
    Country::new("CC", "CCK", "Cocos (Keeling) Islands", "AS"),
    Country::new("CD", "COD", "Congo, The Democratic Republic of the", "AF"),
    Country::new("CF", "CAF", "Central African Republic", "AF"),
    Country::new("CG", "COG", "Congo", "AF"),
    Country::new("CH", "CHE", "Switzerland", "EU"),
    Country::new("CI", "CIV", "Cote D'Ivoire", "AF"),
    Country::new("CK", "COK", "Cook Islands", "OC"),
    Country::new("CL", "CHL", "Chile", "SA"),
    Country::new("CM", "CMR", "Cameroon", "AF"),
    Country::new("CN", "CHN", "China", "AS"),
    Country::new("CO", "COL", "Colombia", "SA"),
    Country::new("CR", "CRI", "Costa Rica", "NA"),
    Country::new("CU", "CUB", "Cuba", "NA"),
    Country::new("CV", "CPV", "Cape Verde", "AF"),
    Country::new("CX", "CXR", "Christmas Island", "AS"),
    Country::new("CY", "CYP", "Cyprus", "AS"),
    Country::new("CZ", "CZE", "Czech Republic", "EU"),
    Country::new("DE", "DEU", "Germany", "EU"),
    Country::new("DJ", "DJI", "Djibouti", "AF"),
    Country::new("DK", "DNK", "Denmark", "EU"),
    Country::new("DM", "DMA", "Dominica", "NA"),
    Country::new("DO", "DOM", "Dominican Republic", "NA"),
    Country::new("DZ", "DZA", "Algeria", "AF"),
    Country::new("EC", "ECU", "Ecuador", "SA"),
    Country::new("EE", "EST", "Estonia", "EU"),
    Country::new("EG", "EGY", "Egypt", "AF"),
    Country::new("EH", "ESH", "Western Sahara", "AF"),
    Country::new("ER", "ERI", "Eritrea", "AF"),
    Country::new("ES", "ESP", "Spain", "EU"),
    Country::new("ET", "ETH", "Ethiopia", "AF"),
    Country::new("FI", "FIN", "Finland", "EU"),
    Country::new("FJ", "FJI", "Fiji", "OC"),
    Country::new("FK", "FLK", "Falkland Islands (Malvinas)", "SA"),
    Country::new("FM", "FSM", "Micronesia, Federated States of", "OC"),
    Country::new("FO", "FRO", "Faroe Islands", "EU"),
    Country::new("FR", "FRA", "France", "EU"),
    Country::new("SX", "SXM", "Sint Maarten (Dutch part)", "NA"),
    Country::new("GA", "GAB", "Gabon", "AF"),
    Country::new("GB", "GBR", "United Kingdom", "EU"),
    Country::new("GD", "GRD", "Grenada", "NA"),
    Country::new("GE", "GEO", "Georgia", "AS"),
    Country::new("GF", "GUF", "French Guiana", "SA"),
    Country::new("GH", "GHA", "Ghana", "AF"),
    Country::new("GI", "GIB", "Gibraltar", "EU"),
    Country::new("GL", "GRL", "Greenland", "NA"),
    Country::new("GM", "GMB", "Gambia", "AF"),
    Country::new("GN", "GIN", "Guinea", "AF"),
    Country::new("GP", "GLP", "Guadeloupe", "NA"),
    Country::new("GQ", "GNQ", "Equatorial Guinea", "AF"),
    Country::new("GR", "GRC", "Greece", "EU"),
    Country::new("GS", "SGS", "South Georgia and the South Sandwich Islands", "AN"),
    Country::new("GT", "GTM", "Guatemala", "NA"),
    Country::new("GU", "GUM", "Guam", "OC"),
    Country::new("GW", "GNB", "Guinea-Bissau", "AF"),
    Country::new("GY", "GUY", "Guyana", "SA"),
    Country::new("HK", "HKG", "Hong Kong", "AS"),
    Country::new("HM", "HMD", "Heard Island and McDonald Islands", "AN"),
    Country::new("HN", "HND", "Honduras", "NA"),
    Country::new("HR", "HRV", "Croatia", "EU"),
    Country::new("HT", "HTI", "Haiti", "NA"),
    Country::new("HU", "HUN", "Hungary", "EU"),
    Country::new("ID", "IDN", "Indonesia", "AS"),
    Country::new("IE", "IRL", "Ireland", "EU"),
    Country::new("IL", "ISR", "Israel", "AS"),
    Country::new("IN", "IND", "India", "AS"),
    Country::new("IO", "IOT", "British Indian Ocean Territory", "AS"),
    Country::new("IQ", "IRQ", "Iraq", "AS"),
    Country::new("IR", "IRN", "Iran, Islamic Republic of", "AS"),
    Country::new("IS", "ISL", "Iceland", "EU"),
    Country::new("IT", "ITA", "Italy", "EU"),
    Country::new("JM", "JAM", "Jamaica", "NA"),
    Country::new("JO", "JOR", "Jordan", "AS"),
    Country::new("JP", "JPN", "Japan", "AS"),
    Country::new("KE", "KEN", "Kenya", "AF"),
    Country::new("KG", "KGZ", "Kyrgyzstan", "AS"),
    Country::new("KH", "KHM", "Cambodia", "AS"),
    Country::new("KI", "KIR", "Kiribati", "OC"),
    Country::new("KM", "COM", "Comoros", "AF"),
    Country::new("KN", "KNA", "Saint Kitts and Nevis", "NA"),
    Country::new("KP", "PRK", "Korea, Democratic People's Republic of", "AS"),
    Country::new("KR", "KOR", "Korea, Republic of", "AS"),
    Country::new("KW", "KWT", "Kuwait", "AS"),
    Country::new("KY", "CYM", "Cayman Islands", "NA"),
    Country::new("KZ", "KAZ", "Kazakhstan", "AS"),
    Country::new("LA", "LAO", "Lao People's Democratic Republic", "AS"),
    Country::new("LB", "LBN", "Lebanon", "AS"),
    Country::new("LC", "LCA", "Saint Lucia", "NA"),
    Country::new("LI", "LIE", "Liechtenstein", "EU"),
    Country::new("LK", "LKA", "Sri Lanka", "AS"),
    Country::new("LR", "LBR", "Liberia", "AF"),
    Country::new("LS", "LSO", "Lesotho", "AF"),
    Country::new("LT", "LTU", "Lithuania", "EU"),
    Country::new("LU", "LUX", "Luxembourg", "EU"),
    Country::new("LV", "LVA", "Latvia", "EU"),
    Country::new("LY", "LBY", "Libya", "AF"),
    Country::new("MA", "MAR", "Morocco", "AF"),
    Country::new("MC", "MCO", "Monaco", "EU"),
    Country::new("MD", "MDA", "Moldova, Republic of", "EU"),
    Country::new("MG", "MDG", "Madagascar", "AF"),
    Country::new("MH", "MHL", "Marshall Islands", "OC"),
    Country::new("MK", "MKD", "Macedonia", "EU"),
    Country::new("ML", "MLI", "Mali", "AF"),
    Country::new("MM", "MMR", "Myanmar", "AS"),
    Country::new("MN", "MNG", "Mongolia", "AS"),
    Country::new("MO", "MAC", "Macau", "AS"),
    Country::new("MP", "MNP", "Northern Mariana Islands", "OC"),
    Country::new("MQ", "MTQ", "Martinique", "NA"),
    Country::new("MR", "MRT", "Mauritania", "AF"),
    Country::new("MS", "MSR", "Montserrat", "NA"),
    Country::new("MT", "MLT", "Malta", "EU"),
    Country::new("MU", "MUS", "Mauritius", "AF"),
    Country::new("MV", "MDV", "Maldives", "AS"),
    Country::new("MW", "MWI", "Malawi", "AF"),
    Country::new("MX", "MEX", "Mexico", "NA"),
    Country::new("MY", "MYS", "Malaysia", "AS"),
    Country::new("MZ", "MOZ", "Mozambique", "AF"),
    Country::new("NA", "NAM", "Namibia", "AF"),
    Country::new("NC", "NCL", "New Caledonia", "OC"),
    Country::new("NE", "NER", "Niger", "AF"),
    Country::new("NF", "NFK", "Norfolk Island", "OC"),
    Country::new("NG", "NGA", "Nigeria", "AF"),
    Country::new("NI", "NIC", "Nicaragua", "NA"),
    Country::new("NL", "NLD", "Netherlands", "EU"),
    Country::new("NO", "NOR", "Norway", "EU"),
    Country::new("NP", "NPL", "Nepal", "AS"),
    Country::new("NR", "NRU", "Nauru", "OC"),
    Country::new("NU", "NIU", "Niue", "OC"),
    Country::new("NZ", "NZL", "New Zealand", "OC"),
    Country::new("OM", "OMN", "Oman", "AS"),
    Country::new("PA", "PAN", "Panama", "NA"),
    Country::new("PE", "PER", "Peru", "SA"),
    Country::new("PF", "PYF", "French Polynesia", "OC"),
    Country::new("PG", "PNG", "Papua New Guinea", "OC"),
    Country::new("PH", "PHL", "Philippines", "AS"),
    Country::new("PK", "PAK", "Pakistan", "AS"),
    Country::new("PL", "POL", "Poland", "EU"),
    Country::new("PM", "SPM", "Saint Pierre and Miquelon", "NA"),
    Country::new("PN", "PCN", "Pitcairn Islands", "OC"),
    Country::new("PR", "PRI", "Puerto Rico", "NA"),
    Country::new("PS", "PSE", "Palestinian Territory", "AS"),
    Country::new("PT", "PRT", "Portugal", "EU"),
    Country::new("PW", "PLW", "Palau", "OC"),
    Country::new("PY", "PRY", "Paraguay", "SA"),
    Country::new("QA", "QAT", "Qatar", "AS"),
    Country::new("RE", "REU", "Reunion", "AF"),
    Country::new("RO", "ROU", "Romania", "EU"),
    Country::new("RU", "RUS", "Russian Federation", "EU"),
    Country::new("RW", "RWA", "Rwanda", "AF"),
    Country::new("SA", "SAU", "Saudi Arabia", "AS"),
    Country::new("SB", "SLB", "Solomon Islands", "OC"),
    Country::new("SC", "SYC", "Seychelles", "AF"),
    Country::new("SD", "SDN", "Sudan", "AF"),
    Country::new("SE", "SWE", "Sweden", "EU"),
    Country::new("SG", "SGP", "Singapore", "AS"),
    Country::new("SH", "SHN", "Saint Helena", "AF"),
    Country::new("SI", "SVN", "Slovenia", "EU"),
    Country::new("SJ", "SJM", "Svalbard and Jan Mayen", "EU"),
    Country::new("SK", "SVK", "Slovakia", "EU"),
    Country::new("SL", "SLE", "Sierra Leone", "AF"),
    Country::new("SM", "SMR", "San Marino", "EU"),
    Country::new("SN", "SEN", "Senegal", "AF"),
    Country::new("SO", "SOM", "Somalia", "AF"),
    Country::new("SR", "SUR", "Suriname", "SA"),
    Country::new("ST", "STP", "Sao Tome and Principe", "AF"),
    Country::new("SV", "SLV", "El Salvador", "NA"),
    Country::new("SY", "SYR", "Syrian Arab Republic", "AS"),
    Country::new("SZ", "SWZ", "Swaziland", "AF"),
    Country::new("TC", "TCA", "Turks and Caicos Islands", "NA"),
    Country::new("TD", "TCD", "Chad", "AF"),
    Country::new("TF", "ATF", "French Southern Territories", "AN"),
    Country::new("TG", "TGO", "Togo", "AF"),
    Country::new("TH", "THA", "Thailand", "AS"),
    Country::new("TJ", "TJK", "Tajikistan", "AS"),
    Country::new("TK", "TKL", "Tokelau", "OC"),
    Country::new("TM", "TKM", "Turkmenistan", "AS"),
    Country::new("TN", "TUN", "Tunisia", "AF"),
    Country::new("TO", "TON", "Tonga", "OC"),
    Country::new("TL", "TLS", "Timor-Leste", "AS"),
    Country::new("TR", "TUR", "Turkey", "EU"),
    Country::new("TT", "TTO", "Trinidad and Tobago", "NA"),
    Country::new("TV", "TUV", "Tuvalu", "OC"),
    Country::new("TW", "TWN", "Taiwan", "AS"),
    Country::new("TZ", "TZA", "Tanzania, United Republic of", "AF"),
    Country::new("UA", "UKR", "Ukraine", "EU"),
    Country::new("UG", "UGA", "Uganda", "AF"),
    Country::new("UM", "UMI", "United States Minor Outlying Islands", "OC"),
    Country::new("US", "USA", "United States", "NA"),
    Country::new("UY", "URY", "Uruguay", "SA"),
    Country::new("UZ", "UZB", "Uzbekistan", "AS"),
    Country::new("VA", "VAT", "Holy See (Vatican City State)", "EU"),
    Country::new("VC", "VCT", "Saint Vincent and the Grenadines", "NA"),
    Country::new("VE", "VEN", "Venezuela", "SA"),
    Country::new("VG", "VGB", "Virgin Islands, British", "NA"),
    Country::new("VI", "VIR", "Virgin Islands, U.S.", "NA"),
    Country::new("VN", "VNM", "Vietnam", "AS"),
    Country::new("VU", "VUT", "Vanuatu", "OC"),
    Country::new("WF", "WLF", "Wallis and Futuna", "OC"),
    Country::new("WS", "WSM", "Samoa", "OC"),
    Country::new("YE", "YEM", "Yemen", "AS"),
    Country::new("YT", "MYT", "Mayotte", "AF"),
    Country::new("RS", "SRB", "Serbia", "EU"),
    Country::new("ZA", "ZAF", "South Africa", "AF"),
    Country::new("ZM", "ZMB", "Zambia", "AF"),
    Country::new("ME", "MNE", "Montenegro", "EU"),
    Country::new("ZW", "ZWE", "Zimbabwe", "AF"),
    Country::new("A1", "A1", "Anonymous Proxy", "--"),
    Country::new("A2", "A2", "Satellite Provider", "--"),
    Country::new("O1", "O1", "Other", "--"),
    Country::new("AX", "ALA", "Aland Islands", "EU"),
    Country::new("GG", "GGY", "Guernsey", "EU"),
    Country::new("IM", "IMN", "Isle of Man", "EU"),
    Country::new("JE", "JEY", "Jersey", "EU"),
    Country::new("BL", "BLM", "Saint Barthelemy", "NA"),
    Country::new("MF", "MAF", "Saint Martin", "NA"),
    Country::new("BQ", "BES", "Bonaire, Saint Eustatius and Saba", "NA"),
    Country::new("SS", "SSD", "South Sudan", "AF"),
    Country::new("O1", "O1", "Other", "--"),
];
