//! Gender Value Object

vocabulary! {
    pub enum Gender: "性别" {
        Male => "男",
        Female => "女",
    }
}
