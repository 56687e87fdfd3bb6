//! Teaching Mode Value Object

vocabulary! {
    /// Where lessons take place
    pub enum TeachMode: "授课方式" {
        Online => "线上",
        /// In person, within Hefei
        Offline => "合肥线下",
    }
}

impl TeachMode {
    #[inline]
    pub const fn is_offline(&self) -> bool {
        matches!(self, TeachMode::Offline)
    }
}
