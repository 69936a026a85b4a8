//! CSV export of enriched transactions.

use time::UtcOffset;

use crate::{
    Error,
    money::format_amount,
    stats::UNCATEGORIZED_LABEL,
    timezone::local_date,
    transaction::EnrichedTransaction,
};

/// Render transactions as a CSV document with the columns
/// `Date, Type, Category, Amount, Note, Account`.
///
/// Every field is quoted. The date is the UTC calendar day of the
/// transaction's epoch-millisecond `date`, formatted `YYYY-MM-DD`, and the
/// amount has exactly two decimal places.
pub fn export_transactions_csv(transactions: &[EnrichedTransaction]) -> Result<String, Error> {
    let mut writer = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Always)
        .from_writer(Vec::new());

    writer
        .write_record(["Date", "Type", "Category", "Amount", "Note", "Account"])
        .map_err(|error| Error::Csv(error.to_string()))?;

    for enriched in transactions {
        let transaction = &enriched.transaction;
        let category_name = enriched
            .category
            .as_ref()
            .map(|category| category.name.as_str())
            .unwrap_or(UNCATEGORIZED_LABEL);
        let account_name = enriched
            .account
            .as_ref()
            .map(|account| account.name.as_str())
            .unwrap_or("");

        writer
            .write_record([
                local_date(transaction.date, UtcOffset::UTC)
                    .to_string()
                    .as_str(),
                transaction.kind.as_str(),
                category_name,
                format_amount(&transaction.amount).as_str(),
                transaction.note.as_str(),
                account_name,
            ])
            .map_err(|error| Error::Csv(error.to_string()))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|error| Error::Csv(error.to_string()))?;

    String::from_utf8(bytes).map_err(|error| Error::Csv(error.to_string()))
}
