//! Region Value Object
//!
//! Districts and counties of Hefei served by offline tutoring.

vocabulary! {
    /// Hefei district or county
    pub enum Region: "区域" {
        Shushan => "蜀山区",
        Baohe => "包河区",
        Luyang => "庐阳区",
        Yaohai => "瑶海区",
        Jingkai => "经开区",
        Gaoxin => "高新区",
        Xinzhan => "新站区",
        Binhu => "滨湖新区",
        Zhengwu => "政务区",
        Feidong => "肥东县",
        Feixi => "肥西县",
        Changfeng => "长丰县",
        Lujiang => "庐江县",
        Chaohu => "巢湖市",
    }
}
