//! Tutor Identity Value Object

vocabulary! {
    /// Academic standing of a tutor
    pub enum Identity: "身份" {
        Undergraduate => "本科生",
        Graduate => "研究生",
    }
}
