// prose-core-client/prose-blocking-xmpp
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use minidom::Element;
use xmpp_parsers::iq::Iq;

#[macro_export]
macro_rules! jid {
    ($jid:expr) => {
        $jid.parse::<jid::Jid>().unwrap()
    };
}

#[macro_export]
macro_rules! bare {
    ($jid:expr) => {
        $jid.parse::<jid::BareJid>().unwrap()
    };
}

#[macro_export]
macro_rules! full {
    ($jid:expr) => {
        $jid.parse::<jid::FullJid>().unwrap()
    };
}

pub trait StrExt {
    fn to_xml_result_string(&self) -> String;
}

impl<T> StrExt for T
where
    T: AsRef<str>,
{
    fn to_xml_result_string(&self) -> String {
        let mut result = self.as_ref().to_string();
        result.retain(|c| c != '\n' && c != '\t');
        result.replace("  ", "")
    }
}

/// Parses an IQ from its XML representation. Panics on malformed input.
pub fn iq_from_xml(xml: impl AsRef<str>) -> Iq {
    let element = xml
        .as_ref()
        .to_xml_result_string()
        .parse::<Element>()
        .expect("Failed to parse XML");
    Iq::try_from(element).expect("Failed to parse IQ")
}
