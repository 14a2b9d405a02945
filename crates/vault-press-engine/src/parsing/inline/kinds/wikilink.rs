pub struct WikiLink;

impl WikiLink {
    pub const OPEN: &'static [u8; 2] = b"[[";
    pub const CLOSE: &'static [u8; 2] = b"]]";
    pub const ALIAS: u8 = b'|';
    /// Some editors leave a third `]` behind; it is swallowed with the link.
    pub const STRAY_CLOSE: u8 = b']';
}
