use super::template::Template;

pub(super) const ENGLISH_HOURS: [&str; 24] = [
    // AM
    "twelve", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
    "eleven", //
    // PM
    "twelve", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
    "eleven",
];

pub(super) const ENGLISH_RELS: [Template<'static>; 12] = [
    Template::current("", " o'clock"),
    Template::current("five past ", ""),
    Template::current("ten past ", ""),
    Template::current("quarter past ", ""),
    Template::current("twenty past ", ""),
    Template::current("twenty five past ", ""),
    Template::current("half past ", ""),
    Template::next("twenty five to ", ""),
    Template::next("twenty to ", ""),
    Template::next("quarter to ", ""),
    Template::next("ten to ", ""),
    Template::next("five to ", ""),
];

pub(super) const GALICIAN_HOURS: [&str; 24] = [
    // AM
    "doce", "unha", "duas", "tres", "catro", "cinco", "seis", "sete", "oito", "nove", "dez",
    "once", //
    // PM
    "doce", "unha", "duas", "tres", "catro", "cinco", "seis", "sete", "oito", "nove", "dez",
    "once",
];

pub(super) const GALICIAN_RELS: [Template<'static>; 12] = [
    Template::current("", " en punto"),
    Template::current("", " e cinco"),
    Template::current("", " e dez"),
    Template::current("", " e cuarto"),
    Template::current("", " e vinte"),
    Template::current("", " e vinte- cinco"),
    Template::current("", " e media"),
    Template::next("", " menos vinte- cinco"),
    Template::next("", " menos vinte"),
    Template::next("", " menos cuarto"),
    Template::next("", " menos dez"),
    Template::next("", " menos cinco"),
];
