//! Right-anchored decomposition of a domain into its label suffixes.
//!
//! `a.b.example.com` decomposes into `a.b.example.com`, `b.example.com`,
//! `example.com` and `com`, most specific first. Each level carries its
//! signature (the dotted value with separators removed). A single signature
//! buffer is built per domain: the signature of every shorter level is a
//! byte suffix of the full one, so levels borrow from it.

/// One decomposition level of a domain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subdomain<'a> {
    /// Dotted value with separators removed
    pub signature: &'a str,
    /// Dotted value, a suffix of the decomposed domain
    pub dotted: &'a str,
}

/// Decomposed domain, owning the shared signature buffer
#[derive(Debug, Clone)]
pub struct Decomposition<'a> {
    domain: &'a str,
    signature: String,
}

/// Decompose `domain` into its right-anchored label suffixes.
///
/// No normalization is applied: callers pass an already lower-cased,
/// Punycode-encoded domain.
pub fn decompose(domain: &str) -> Decomposition<'_> {
    let signature = domain.chars().filter(|&c| c != '.').collect();
    Decomposition { domain, signature }
}

impl<'a> Decomposition<'a> {
    /// Iterate levels from the full domain down to its last label
    pub fn iter(&self) -> Subdomains<'_> {
        Subdomains {
            remaining: Some(self.domain),
            signature: &self.signature,
        }
    }

    /// Signature of the full domain
    pub fn signature(&self) -> &str {
        &self.signature
    }
}

impl<'d, 'a> IntoIterator for &'d Decomposition<'a> {
    type Item = Subdomain<'d>;
    type IntoIter = Subdomains<'d>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the levels of a [`Decomposition`]
#[derive(Debug, Clone)]
pub struct Subdomains<'a> {
    remaining: Option<&'a str>,
    signature: &'a str,
}

impl<'a> Iterator for Subdomains<'a> {
    type Item = Subdomain<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let dotted = self.remaining?;
        let dots = dotted.bytes().filter(|&b| b == b'.').count();
        let signature = &self.signature[self.signature.len() - (dotted.len() - dots)..];

        self.remaining = dotted.find('.').map(|dot| &dotted[dot + 1..]);

        Some(Subdomain { signature, dotted })
    }
}
