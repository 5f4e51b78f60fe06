//! 测试辅助模块
//!
//! 提供便捷的国家数据工厂方法。

use std::collections::BTreeMap;

use crate::types::{CountryRecord, Currency, NativeName};

pub fn currency(name: &str, symbol: &str) -> Currency {
    Currency {
        name: name.to_string(),
        symbol: symbol.to_string(),
    }
}

pub fn native(common: &str) -> NativeName {
    NativeName {
        common: common.to_string(),
        official: common.to_string(),
    }
}

pub fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(ToString::to_string).collect()
}

pub fn country(name: &str, code: &str, region: &str, borders: &[&str]) -> CountryRecord {
    let mut c = CountryRecord::named(name);
    c.code = Some(code.to_string());
    c.region = region.to_string();
    if !borders.is_empty() {
        c.borders = Some(strings(borders));
    }
    c
}

/// 小型样例集合：德国、法国、瑞士、日本
pub fn sample_countries() -> Vec<CountryRecord> {
    let mut germany = country("Germany", "DEU", "Europe", &["FRA", "CHE", "AUT"]);
    germany.population = 83_240_525;
    germany.subregion = "Western Europe".to_string();
    germany.capitals = Some(strings(&["Berlin"]));
    germany.top_level_domains = Some(strings(&[".de"]));
    germany.currencies = Some(BTreeMap::from([("EUR".to_string(), currency("Euro", "€"))]));
    germany.native_names = Some(BTreeMap::from([("deu".to_string(), native("Deutschland"))]));
    germany.languages = Some(BTreeMap::from([("deu".to_string(), "German".to_string())]));

    let mut france = country("France", "FRA", "Europe", &["DEU", "CHE"]);
    france.population = 67_391_582;

    let mut switzerland = country("Switzerland", "CHE", "Europe", &["DEU", "FRA"]);
    switzerland.population = 8_654_622;
    switzerland.languages = Some(BTreeMap::from([
        ("fra".to_string(), "French".to_string()),
        ("gsw".to_string(), "Swiss German".to_string()),
        ("ita".to_string(), "Italian".to_string()),
        ("roh".to_string(), "Romansh".to_string()),
    ]));

    let mut japan = country("Japan", "JPN", "Asia", &[]);
    japan.population = 125_836_021;

    vec![germany, france, switzerland, japan]
}
