// prose-core-client/prose-blocking-xmpp
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use jid::Jid;
use minidom::{Element, NSChoice};

use crate::util::ParseError;

pub trait ElementExt {
    fn expect_is<'a>(
        &self,
        name: impl AsRef<str>,
        ns: impl Into<NSChoice<'a>>,
    ) -> Result<(), ParseError>;

    fn attr_req(&self, name: impl AsRef<str>) -> Result<&str, ParseError>;

    /// Parses the required attribute `name` as a JID.
    fn attr_jid_req(&self, name: impl AsRef<str>) -> Result<Jid, ParseError>;
}

impl ElementExt for Element {
    fn expect_is<'a>(
        &self,
        name: impl AsRef<str>,
        ns: impl Into<NSChoice<'a>>,
    ) -> Result<(), ParseError> {
        let ns = ns.into();
        if !self.is(&name, ns) {
            return Err(ParseError::Generic {
                msg: format!(
                    "Expected element with name {} and namespace {}. Got {} and {} instead.",
                    name.as_ref(),
                    ns_choice_to_string(ns),
                    self.name(),
                    self.ns()
                ),
            });
        }
        Ok(())
    }

    fn attr_req(&self, name: impl AsRef<str>) -> Result<&str, ParseError> {
        self.attr(name.as_ref()).ok_or(ParseError::Generic {
            msg: format!(
                "Missing required attribute {} in element {}.",
                name.as_ref(),
                self.name()
            ),
        })
    }

    fn attr_jid_req(&self, name: impl AsRef<str>) -> Result<Jid, ParseError> {
        let value = self.attr_req(name)?;
        value.parse::<Jid>().map_err(|source| ParseError::InvalidJid {
            jid: value.to_string(),
            source,
        })
    }
}

fn ns_choice_to_string(ns: NSChoice) -> String {
    match ns {
        NSChoice::None => "<none>".to_string(),
        NSChoice::OneOf(ns) => ns.to_string(),
        NSChoice::AnyOf(ns) => ns.join(", "),
        NSChoice::Any => "<any>".to_string(),
    }
}
