//! Constants for URL decomposition and port resolution.

/// Separator between the URL head and its query string.
pub const QUERY_SEPARATOR: char = '?';

/// Separator between query parameters.
pub const PAIR_SEPARATOR: char = '&';

/// Separator between a parameter name and its value.
pub const VALUE_SEPARATOR: char = '=';

/// Separator between the URL body and its fragment.
pub const FRAGMENT_SEPARATOR: char = '#';

/// Delimiter that terminates a leading scheme token.
pub const SCHEME_DELIMITER: &str = "://";

/// Well-known default ports, keyed by lower-case scheme name.
///
/// Lookups through [`default_port`](crate::default_port) are
/// case-insensitive. Schemes missing from this table have no default.
pub const DEFAULT_PORTS: &[(&str, u16)] = &[
    ("http", 80),
    ("https", 443),
    ("ftp", 21),
    ("ftps", 990),
    ("sftp", 22),
    ("ssh", 22),
    ("telnet", 23),
    ("smtp", 25),
    ("smtps", 465),
    ("imap", 143),
    ("imaps", 993),
    ("pop3", 110),
    ("pop3s", 995),
    ("ldap", 389),
    ("ldaps", 636),
    ("dns", 53),
    ("dhcp", 67),
    ("ntp", 123),
    ("mysql", 3306),
    ("pgsql", 5432),
    ("mssql", 1433),
    ("rdp", 3389),
    ("redis", 6379),
    ("memcached", 11211),
    ("mongodb", 27017),
];
