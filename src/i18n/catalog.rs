use super::Language;
use super::keys::*;

type Entries = &'static [(&'static str, &'static str)];

const PL: Entries = &[
    (CHART_TITLE, "Wzrost kapitału emerytalnego ({years} lat)"),
    (CHART_AXIS_AGE, "Wiek"),
    (CHART_AXIS_VALUE, "Wartość ({currency})"),
    (CHART_SERIES_NOMINAL, "Wartość nominalna"),
    (CHART_SERIES_REAL, "Wartość realna (po inflacji)"),
    (
        SURPLUS_NOTE,
        "Obecna miesięczna nadwyżka do oszczędzania: {amount}",
    ),
    (TABLE_TITLE, "Szczegółowe dane"),
    (TABLE_AGE, "Wiek"),
    (TABLE_INCOME, "Roczny dochód"),
    (TABLE_EXPENSES, "Roczne wydatki"),
    (TABLE_CONTRIBUTION, "Roczna wpłata"),
    (TABLE_NOMINAL, "Wartość nominalna"),
    (TABLE_REAL, "Wartość realna"),
    (SUMMARY_TITLE, "Podsumowanie"),
    (SUMMARY_FINAL_NOMINAL, "Kapitał na emeryturze"),
    (SUMMARY_FINAL_NOMINAL_HELP, "Wartość nominalna kapitału"),
    (SUMMARY_FINAL_REAL, "Wartość realna"),
    (SUMMARY_FINAL_REAL_HELP, "Wartość skorygowana o inflację"),
    (SUMMARY_TOTAL_CONTRIBUTIONS, "Całkowite wpłaty"),
    (
        SUMMARY_TOTAL_CONTRIBUTIONS_HELP,
        "Suma wszystkich wpłat przez lata",
    ),
    (SUMMARY_AVG_CONTRIBUTION, "Średnia roczna wpłata"),
    (
        SUMMARY_AVG_CONTRIBUTION_HELP,
        "Średnia z lat z dodatnią nadwyżką",
    ),
    (SUMMARY_INVESTMENT_GAIN, "Zysk z inwestycji"),
    (
        SUMMARY_INVESTMENT_GAIN_HELP,
        "Różnica między kapitałem a wpłatami",
    ),
    (NOTES_TITLE, "Dodatkowe informacje"),
    (
        NOTES_RETIREMENT_YEAR,
        "W roku emerytury ({age} lat):\nDochód: {income}\nWydatki: {expenses}\nNadwyżka: {surplus}",
    ),
    (
        NOTES_PENSION_NOMINAL,
        "Miesięczna emerytura (4% reguła):\n{amount} (w cenach z roku, w którym kończysz {age} lat)",
    ),
    (
        NOTES_PENSION_REAL,
        "To odpowiada dzisiaj:\n{amount} siły nabywczej",
    ),
    (
        NOTES_COVERAGE,
        "Pokrycie obecnych wydatków:\n{pct}% ({pension} vs {expenses})",
    ),
    (NOTES_DOUBLING, "Czas podwojenia kapitału:\n{years} lat"),
    (TIPS_TITLE, "Porady emerytalne"),
    (TIPS_RULE_TITLE, "Zasada 4%"),
    (
        TIPS_RULE_BODY,
        "Bezpieczna roczna wypłata to 4% zgromadzonego kapitału. To oznacza, że potrzebujesz 25x swoich rocznych wydatków.",
    ),
    (TIPS_DIVERSIFY_TITLE, "Dywersyfikacja"),
    (
        TIPS_DIVERSIFY_BODY,
        "Rozłóż inwestycje między różne klasy aktywów: akcje, obligacje, nieruchomości, surowce.",
    ),
    (TIPS_TIME_TITLE, "Czas to pieniądz"),
    (
        TIPS_TIME_BODY,
        "Im wcześniej zaczniesz, tym więcej skorzystasz z procentu składanego. Każdy rok ma znaczenie!",
    ),
    (
        ERROR_INVALID_AGE_RANGE,
        "Wiek przejścia na emeryturę musi być wyższy niż obecny wiek!",
    ),
    (
        ERROR_NO_SURPLUS,
        "Obecne wydatki przewyższają dochody! Nie ma nadwyżki do oszczędzania.",
    ),
];

const EN: Entries = &[
    (CHART_TITLE, "Retirement capital growth ({years} years)"),
    (CHART_AXIS_AGE, "Age"),
    (CHART_AXIS_VALUE, "Value ({currency})"),
    (CHART_SERIES_NOMINAL, "Nominal value"),
    (CHART_SERIES_REAL, "Real value (after inflation)"),
    (SURPLUS_NOTE, "Current monthly surplus available to save: {amount}"),
    (TABLE_TITLE, "Detailed data"),
    (TABLE_AGE, "Age"),
    (TABLE_INCOME, "Annual income"),
    (TABLE_EXPENSES, "Annual expenses"),
    (TABLE_CONTRIBUTION, "Annual contribution"),
    (TABLE_NOMINAL, "Nominal value"),
    (TABLE_REAL, "Real value"),
    (SUMMARY_TITLE, "Summary"),
    (SUMMARY_FINAL_NOMINAL, "Capital at retirement"),
    (SUMMARY_FINAL_NOMINAL_HELP, "Nominal value of the capital"),
    (SUMMARY_FINAL_REAL, "Real value"),
    (SUMMARY_FINAL_REAL_HELP, "Value adjusted for inflation"),
    (SUMMARY_TOTAL_CONTRIBUTIONS, "Total contributions"),
    (
        SUMMARY_TOTAL_CONTRIBUTIONS_HELP,
        "Sum of all contributions over the years",
    ),
    (SUMMARY_AVG_CONTRIBUTION, "Average annual contribution"),
    (
        SUMMARY_AVG_CONTRIBUTION_HELP,
        "Average over the years with a positive surplus",
    ),
    (SUMMARY_INVESTMENT_GAIN, "Investment gain"),
    (
        SUMMARY_INVESTMENT_GAIN_HELP,
        "Difference between capital and contributions",
    ),
    (NOTES_TITLE, "Additional information"),
    (
        NOTES_RETIREMENT_YEAR,
        "In the year of retirement (age {age}):\nIncome: {income}\nExpenses: {expenses}\nSurplus: {surplus}",
    ),
    (
        NOTES_PENSION_NOMINAL,
        "Monthly pension (4% rule):\n{amount} (in prices of the year you turn {age})",
    ),
    (
        NOTES_PENSION_REAL,
        "In today's money:\n{amount} of purchasing power",
    ),
    (
        NOTES_COVERAGE,
        "Coverage of current expenses:\n{pct}% ({pension} vs {expenses})",
    ),
    (NOTES_DOUBLING, "Capital doubling time:\n{years} years"),
    (TIPS_TITLE, "Retirement tips"),
    (TIPS_RULE_TITLE, "The 4% rule"),
    (
        TIPS_RULE_BODY,
        "A safe annual withdrawal is 4% of the accumulated capital. That means you need 25x your annual expenses.",
    ),
    (TIPS_DIVERSIFY_TITLE, "Diversification"),
    (
        TIPS_DIVERSIFY_BODY,
        "Spread your investments across asset classes: stocks, bonds, real estate, commodities.",
    ),
    (TIPS_TIME_TITLE, "Time is money"),
    (
        TIPS_TIME_BODY,
        "The earlier you start, the more you benefit from compound interest. Every year counts!",
    ),
    (
        ERROR_INVALID_AGE_RANGE,
        "Retirement age must be greater than current age!",
    ),
    (
        ERROR_NO_SURPLUS,
        "Current expenses exceed income! There is no surplus to save.",
    ),
];

const DE: Entries = &[
    (CHART_TITLE, "Wachstum des Ruhestandskapitals ({years} Jahre)"),
    (CHART_AXIS_AGE, "Alter"),
    (CHART_AXIS_VALUE, "Wert ({currency})"),
    (CHART_SERIES_NOMINAL, "Nominalwert"),
    (CHART_SERIES_REAL, "Realwert (inflationsbereinigt)"),
    (SURPLUS_NOTE, "Aktueller monatlicher Sparüberschuss: {amount}"),
    (TABLE_TITLE, "Detaillierte Daten"),
    (TABLE_AGE, "Alter"),
    (TABLE_INCOME, "Jahreseinkommen"),
    (TABLE_EXPENSES, "Jahresausgaben"),
    (TABLE_CONTRIBUTION, "Jahresbeitrag"),
    (TABLE_NOMINAL, "Nominalwert"),
    (TABLE_REAL, "Realwert"),
    (SUMMARY_TITLE, "Zusammenfassung"),
    (SUMMARY_FINAL_NOMINAL, "Kapital bei Renteneintritt"),
    (SUMMARY_FINAL_NOMINAL_HELP, "Nominalwert des Kapitals"),
    (SUMMARY_FINAL_REAL, "Realwert"),
    (SUMMARY_FINAL_REAL_HELP, "Inflationsbereinigter Wert"),
    (SUMMARY_TOTAL_CONTRIBUTIONS, "Gesamte Einzahlungen"),
    (
        SUMMARY_TOTAL_CONTRIBUTIONS_HELP,
        "Summe aller Einzahlungen über die Jahre",
    ),
    (SUMMARY_AVG_CONTRIBUTION, "Durchschnittlicher Jahresbeitrag"),
    (
        SUMMARY_AVG_CONTRIBUTION_HELP,
        "Durchschnitt der Jahre mit positivem Überschuss",
    ),
    (SUMMARY_INVESTMENT_GAIN, "Anlageertrag"),
    (
        SUMMARY_INVESTMENT_GAIN_HELP,
        "Differenz zwischen Kapital und Einzahlungen",
    ),
    (NOTES_TITLE, "Weitere Informationen"),
    (
        NOTES_RETIREMENT_YEAR,
        "Im Jahr des Renteneintritts ({age} Jahre):\nEinkommen: {income}\nAusgaben: {expenses}\nÜberschuss: {surplus}",
    ),
    (
        NOTES_PENSION_NOMINAL,
        "Monatliche Rente (4%-Regel):\n{amount} (in Preisen des Jahres, in dem Sie {age} werden)",
    ),
    (NOTES_PENSION_REAL, "Das entspricht heute:\n{amount} Kaufkraft"),
    (
        NOTES_COVERAGE,
        "Deckung der aktuellen Ausgaben:\n{pct}% ({pension} vs {expenses})",
    ),
    (NOTES_DOUBLING, "Verdopplungszeit des Kapitals:\n{years} Jahre"),
    (TIPS_TITLE, "Tipps für den Ruhestand"),
    (TIPS_RULE_TITLE, "Die 4%-Regel"),
    (
        TIPS_RULE_BODY,
        "Eine sichere jährliche Entnahme beträgt 4% des angesparten Kapitals. Sie benötigen also das 25-Fache Ihrer jährlichen Ausgaben.",
    ),
    (TIPS_DIVERSIFY_TITLE, "Diversifikation"),
    (
        TIPS_DIVERSIFY_BODY,
        "Verteilen Sie Ihre Anlagen auf verschiedene Anlageklassen: Aktien, Anleihen, Immobilien, Rohstoffe.",
    ),
    (TIPS_TIME_TITLE, "Zeit ist Geld"),
    (
        TIPS_TIME_BODY,
        "Je früher Sie beginnen, desto mehr profitieren Sie vom Zinseszins. Jedes Jahr zählt!",
    ),
    (
        ERROR_INVALID_AGE_RANGE,
        "Das Rentenalter muss höher sein als das aktuelle Alter!",
    ),
    (
        ERROR_NO_SURPLUS,
        "Die Ausgaben übersteigen das Einkommen! Es gibt keinen Überschuss zum Sparen.",
    ),
];

pub(super) fn entries(lang: Language) -> Entries {
    match lang {
        Language::Pl => PL,
        Language::En => EN,
        Language::De => DE,
    }
}

pub(super) fn lookup(lang: Language, key: &str) -> Option<&'static str> {
    entries(lang)
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, v)| *v)
}
