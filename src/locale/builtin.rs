use super::{Label, Locale, SentenceOrder, UnitLabels};

pub fn spanish() -> Locale {
    Locale {
        now: "ahora".to_owned(),
        ago_time: "hace".to_owned(),
        in_time: "en".to_owned(),
        sentence_order: SentenceOrder::Prefix,
        units: UnitLabels {
            seconds: Label::new("segundo", "segundos"),
            minutes: Label::new("minuto", "minutos"),
            hours: Label::new("hora", "horas"),
            days: Label::new("día", "días"),
            months: Label::new("mes", "meses"),
            years: Label::new("año", "años"),
            decades: Label::new("década", "décadas"),
            centuries: Label::new("siglo", "siglos"),
            millenniums: Label::new("milenio", "milenios"),
        },
    }
}

pub fn english() -> Locale {
    Locale {
        now: "now".to_owned(),
        ago_time: "ago".to_owned(),
        in_time: "in".to_owned(),
        sentence_order: SentenceOrder::Suffix,
        units: UnitLabels {
            seconds: Label::new("second", "seconds"),
            minutes: Label::new("minute", "minutes"),
            hours: Label::new("hour", "hours"),
            days: Label::new("day", "days"),
            months: Label::new("month", "months"),
            years: Label::new("year", "years"),
            decades: Label::new("decade", "decades"),
            centuries: Label::new("century", "centuries"),
            millenniums: Label::new("millennium", "millenniums"),
        },
    }
}
