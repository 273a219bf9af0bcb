//! Integration tests against an excerpt of the public suffix list.

use psl_engine_r::{
    parse_rules_str, read_json, search, write_json, DomainErrorKind, PslError, PublicSuffixList,
};

/// Excerpt of public_suffix_list.dat covering the test vectors below
const LIST: &str = r#"// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0.

// ===BEGIN ICANN DOMAINS===

// ac : https://en.wikipedia.org/wiki/.ac
ac
com.ac
edu.ac
gov.ac
net.ac
mil.ac
org.ac

// ad : https://en.wikipedia.org/wiki/.ad
ad

// ao : https://en.wikipedia.org/wiki/.ao
ao
ed.ao
gv.ao
og.ao
co.ao
pb.ao
it.ao

// ar : https://nic.ar/nic-argentina/normativa-vigente
ar
com.ar
edu.ar
gob.ar
gov.ar
int.ar
mil.ar
net.ar
org.ar
tur.ar

// arpa : https://en.wikipedia.org/wiki/.arpa
arpa
e164.arpa
in-addr.arpa
ip6.arpa
iris.arpa
uri.arpa
urn.arpa

be
*.bd
biz

// ck : https://en.wikipedia.org/wiki/.ck
*.ck
!www.ck

// cn : https://en.wikipedia.org/wiki/.cn
cn
com.cn
公司.cn
网络.cn
中国

com

// jp : https://en.wikipedia.org/wiki/.jp
jp
ac.jp
kyoto.jp
ide.kyoto.jp
*.kobe.jp
!city.kobe.jp

*.mm
ng
i.ng
*.np

// tw : https://en.wikipedia.org/wiki/.tw
tw
edu.tw
gov.tw
mil.tw
com.tw
net.tw
org.tw
idv.tw
game.tw
ebiz.tw
club.tw
網路.tw
組織.tw
商業.tw

// uk : https://en.wikipedia.org/wiki/.uk
uk
ac.uk
co.uk
gov.uk
ltd.uk
me.uk
net.uk
nhs.uk
org.uk
plc.uk
police.uk
*.sch.uk

// us : https://en.wikipedia.org/wiki/.us
us
ak.us
k12.ak.us

// xn--p1ai ("rf", Russian-Cyrillic)
рф

ing

// ===END ICANN DOMAINS===
// ===BEGIN PRIVATE DOMAINS===

blogspot.com.ar
blogspot.co.uk
blogspot.tw
uk.com
*.0emm.com
*.transurl.be

// ===END PRIVATE DOMAINS===
"#;

fn list() -> PublicSuffixList {
    PublicSuffixList::from_rules(LIST, "fixture").unwrap()
}

#[test]
fn test_public_suffix_vectors() {
    let list = list();
    let cases = [
        ("", ""),
        ("ao", "ao"),
        ("www.ao", "ao"),
        ("pb.ao", "pb.ao"),
        ("www.pb.ao", "pb.ao"),
        ("www.xxx.yyy.zzz.pb.ao", "pb.ao"),
        ("ar", "ar"),
        ("www.ar", "ar"),
        ("nic.ar", "ar"),
        ("www.nic.ar", "ar"),
        ("com.ar", "com.ar"),
        ("www.com.ar", "com.ar"),
        ("blogspot.com.ar", "blogspot.com.ar"),
        ("www.blogspot.com.ar", "blogspot.com.ar"),
        ("www.xxx.yyy.zzz.blogspot.com.ar", "blogspot.com.ar"),
        ("logspot.com.ar", "com.ar"),
        ("zlogspot.com.ar", "com.ar"),
        ("zblogspot.com.ar", "com.ar"),
        ("arpa", "arpa"),
        ("www.arpa", "arpa"),
        ("urn.arpa", "urn.arpa"),
        ("www.urn.arpa", "urn.arpa"),
        ("www.xxx.yyy.zzz.urn.arpa", "urn.arpa"),
        ("jp", "jp"),
        ("kobe.jp", "jp"),
        ("c.kobe.jp", "c.kobe.jp"),
        ("b.c.kobe.jp", "c.kobe.jp"),
        ("a.b.c.kobe.jp", "c.kobe.jp"),
        ("city.kobe.jp", "kobe.jp"),
        ("www.city.kobe.jp", "kobe.jp"),
        ("kyoto.jp", "kyoto.jp"),
        ("test.kyoto.jp", "kyoto.jp"),
        ("ide.kyoto.jp", "ide.kyoto.jp"),
        ("b.ide.kyoto.jp", "ide.kyoto.jp"),
        ("a.b.ide.kyoto.jp", "ide.kyoto.jp"),
        ("tw", "tw"),
        ("aaa.tw", "tw"),
        ("www.aaa.tw", "tw"),
        ("xn--czrw28b.aaa.tw", "tw"),
        ("edu.tw", "edu.tw"),
        ("www.edu.tw", "edu.tw"),
        ("xn--czrw28b.edu.tw", "edu.tw"),
        ("xn--czrw28b.tw", "xn--czrw28b.tw"),
        ("www.xn--czrw28b.tw", "xn--czrw28b.tw"),
        ("xn--uc0atv.xn--czrw28b.tw", "xn--czrw28b.tw"),
        ("xn--kpry57d.tw", "tw"),
        ("uk", "uk"),
        ("aaa.uk", "uk"),
        ("www.aaa.uk", "uk"),
        ("mod.uk", "uk"),
        ("www.mod.uk", "uk"),
        ("sch.uk", "uk"),
        ("mod.sch.uk", "mod.sch.uk"),
        ("www.sch.uk", "www.sch.uk"),
        ("blogspot.co.uk", "blogspot.co.uk"),
        ("blogspot.nic.uk", "uk"),
        ("blogspot.sch.uk", "blogspot.sch.uk"),
        ("xn--p1ai", "xn--p1ai"),
        ("aaa.xn--p1ai", "xn--p1ai"),
        ("www.xxx.yyy.xn--p1ai", "xn--p1ai"),
        ("bd", "bd"),
        ("www.bd", "www.bd"),
        ("zzz.bd", "zzz.bd"),
        ("www.zzz.bd", "zzz.bd"),
        ("www.xxx.yyy.zzz.bd", "zzz.bd"),
        ("nosuchtld", "nosuchtld"),
        ("foo.nosuchtld", "nosuchtld"),
        ("bar.foo.nosuchtld", "nosuchtld"),
        ("free.", ""),
        ("e.co", "co"),
        ("g.n", "n"),
        ("cl.a", "a"),
        (".m.m", "m"),
        ("b..n", "n"),
        (".ck", ".ck"),
        ("a.ck", "a.ck"),
        ("k.h", "h"),
    ];

    for (domain, want) in cases {
        let (got, _) = list.public_suffix(domain);
        assert_eq!(got, want, "public suffix of {:?}", domain);
    }
}

#[test]
fn test_search_flags() {
    let list = list();
    let cases = [
        ("nosuchtld", "nosuchtld", false, false),
        ("www.bd", "www.bd", true, true),
        ("xn--p1ai", "xn--p1ai", true, true),
        ("example.globalsign.fake", "fake", false, false),
        ("cl.a", "a", false, false),
        (".m.m", "m", false, false),
        ("b..n", "n", false, false),
        ("b.n", "n", false, false),
        ("np", "np", false, false),
        ("ad", "ad", true, true),
        ("00.za", "za", false, false),
        ("transurl.be", "be", true, true),
        ("0emm.com", "com", true, true),
        ("i.ng", "i.ng", true, true),
        (".mm", ".mm", true, true),
        ("example.uk.com", "uk.com", false, true),
    ];

    for (domain, suffix, icann, found) in cases {
        let got = list.resolve(domain);
        assert_eq!(got.suffix, suffix, "suffix of {:?}", domain);
        assert_eq!(got.icann, icann, "icann flag of {:?}", domain);
        assert_eq!(got.found, found, "found flag of {:?}", domain);
        assert_eq!(list.has_public_suffix(domain), found, "has_public_suffix({:?})", domain);
    }
}

#[test]
fn test_effective_tld_plus_one_vectors() {
    let list = list();
    let cases = [
        ("", ""),
        ("example", ""),
        ("example.example", "example.example"),
        ("b.example.example", "example.example"),
        ("a.b.example.example", "example.example"),
        ("biz", ""),
        ("domain.biz", "domain.biz"),
        ("b.domain.biz", "domain.biz"),
        ("a.b.domain.biz", "domain.biz"),
        ("com", ""),
        ("example.com", "example.com"),
        ("b.example.com", "example.com"),
        ("a.b.example.com", "example.com"),
        ("uk.com", ""),
        ("example.uk.com", "example.uk.com"),
        ("b.example.uk.com", "example.uk.com"),
        ("a.b.example.uk.com", "example.uk.com"),
        ("test.ac", "test.ac"),
        ("mm", ""),
        ("c.mm", ""),
        ("b.c.mm", "b.c.mm"),
        ("a.b.c.mm", "b.c.mm"),
        ("jp", ""),
        ("test.jp", "test.jp"),
        ("www.test.jp", "test.jp"),
        ("ac.jp", ""),
        ("test.ac.jp", "test.ac.jp"),
        ("www.test.ac.jp", "test.ac.jp"),
        ("kyoto.jp", ""),
        ("test.kyoto.jp", "test.kyoto.jp"),
        ("ide.kyoto.jp", ""),
        ("b.ide.kyoto.jp", "b.ide.kyoto.jp"),
        ("a.b.ide.kyoto.jp", "b.ide.kyoto.jp"),
        ("c.kobe.jp", ""),
        ("b.c.kobe.jp", "b.c.kobe.jp"),
        ("a.b.c.kobe.jp", "b.c.kobe.jp"),
        ("city.kobe.jp", "city.kobe.jp"),
        ("www.city.kobe.jp", "city.kobe.jp"),
        ("ck", ""),
        ("test.ck", ""),
        ("b.test.ck", "b.test.ck"),
        ("a.b.test.ck", "b.test.ck"),
        ("www.ck", "www.ck"),
        ("www.www.ck", "www.ck"),
        ("us", ""),
        ("test.us", "test.us"),
        ("www.test.us", "test.us"),
        ("ak.us", ""),
        ("test.ak.us", "test.ak.us"),
        ("www.test.ak.us", "test.ak.us"),
        ("k12.ak.us", ""),
        ("test.k12.ak.us", "test.k12.ak.us"),
        ("www.test.k12.ak.us", "test.k12.ak.us"),
        ("xn--85x722f.com.cn", "xn--85x722f.com.cn"),
        ("xn--85x722f.xn--55qx5d.cn", "xn--85x722f.xn--55qx5d.cn"),
        ("www.xn--85x722f.xn--55qx5d.cn", "xn--85x722f.xn--55qx5d.cn"),
        ("shishi.xn--55qx5d.cn", "shishi.xn--55qx5d.cn"),
        ("xn--55qx5d.cn", ""),
        ("xn--85x722f.xn--fiqs8s", "xn--85x722f.xn--fiqs8s"),
        ("www.xn--85x722f.xn--fiqs8s", "xn--85x722f.xn--fiqs8s"),
        ("shishi.xn--fiqs8s", "shishi.xn--fiqs8s"),
        ("xn--fiqs8s", ""),
    ];

    for (domain, want) in cases {
        let got = list.effective_tld_plus_one(domain).unwrap_or_default();
        assert_eq!(got, want, "eTLD+1 of {:?}", domain);
    }
}

#[test]
fn test_wildcard_boundary_cases() {
    let table = parse_rules_str("// ===BEGIN ICANN DOMAINS===\n*.ck\n", "ck").unwrap();

    // shorter than "*.ck" with an empty wildcard label
    assert_eq!(search(&table, ".ck").suffix, ".ck");
    // exactly as long as "*.ck"
    assert_eq!(search(&table, "a.ck").suffix, "a.ck");
    // one label inside the wildcard: the suffix is the whole domain
    assert_eq!(search(&table, "test.ck").suffix, "test.ck");
    match psl_engine_r::effective_tld_plus_one(&table, "test.ck") {
        Err(PslError::InvalidDomain { kind, .. }) => assert_eq!(kind, DomainErrorKind::TooShort),
        other => panic!("expected InvalidDomain, got {:?}", other),
    }
}

#[test]
fn test_unicode_queries_match_punycode_rules() {
    let list = list();
    assert_eq!(list.public_suffix("www.商業.tw").0, "xn--czrw28b.tw");
    assert_eq!(
        list.effective_tld_plus_one("shishi.中国").unwrap(),
        "shishi.xn--fiqs8s"
    );
}

#[test]
fn test_fixture_round_trip() {
    let table = parse_rules_str(LIST, "fixture").unwrap();

    let mut buf = Vec::new();
    write_json(&table, &mut buf).unwrap();
    let restored = read_json(buf.as_slice()).unwrap();

    assert_eq!(restored, table);
    assert_eq!(restored.release(), "fixture");
    assert_eq!(restored.rule_count(), table.rule_count());
}
