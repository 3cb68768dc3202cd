//! Line-level parsing of the order data source.
//!
//! Each non-blank line is `order_id,product_name,unit_price` with no
//! header row.

use crate::error::OrderError;
use crate::ids::OrderId;
use crate::money::Money;

const FIELD_COUNT: usize = 3;

/// One product line of the data source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// 1-based line number in the source.
    pub line: usize,
    pub order_id: OrderId,
    pub product_name: String,
    pub price: Money,
}

impl Record {
    /// Parse a single line.
    ///
    /// Fields are trimmed. Wrong field counts, an empty product name or a
    /// non-numeric id or price yield [`OrderError::MalformedRecord`].
    pub fn parse(line: usize, text: &str) -> Result<Self, OrderError> {
        let fields: Vec<&str> = text.split(',').map(str::trim).collect();
        let [id, name, price] = fields.as_slice() else {
            return Err(OrderError::at_line(
                line,
                format!("expected {} fields, found {}", FIELD_COUNT, fields.len()),
            ));
        };

        if name.is_empty() {
            return Err(OrderError::at_line(line, "empty product name"));
        }

        Ok(Self {
            line,
            order_id: id.parse().map_err(|e| OrderError::at_line(line, e))?,
            product_name: name.to_string(),
            price: price.parse().map_err(|e| OrderError::at_line(line, e))?,
        })
    }
}

/// Parse every non-blank line of `contents`.
///
/// Stops at the first malformed line.
pub fn parse_records(contents: &str) -> Result<Vec<Record>, OrderError> {
    contents
        .lines()
        .enumerate()
        .filter(|(_, text)| !text.trim().is_empty())
        .map(|(index, text)| Record::parse(index + 1, text))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reason(err: OrderError) -> (usize, String) {
        match err {
            OrderError::MalformedRecord { line, reason } => (line, reason),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_parse_record() {
        let record = Record::parse(1, "1,Slivered Almonds,22.88").unwrap();
        assert_eq!(record.line, 1);
        assert_eq!(record.order_id, OrderId::new(1));
        assert_eq!(record.product_name, "Slivered Almonds");
        assert_eq!(record.price, Money::new(2288));
    }

    #[test]
    fn test_parse_record_trims_fields() {
        let record = Record::parse(4, " 12 , Grape Seed Oil ,74.9\r").unwrap();
        assert_eq!(record.order_id, OrderId::new(12));
        assert_eq!(record.product_name, "Grape Seed Oil");
        assert_eq!(record.price, Money::new(7490));
    }

    #[test]
    fn test_parse_record_wrong_field_count() {
        let (line, why) = reason(Record::parse(3, "1,Bran").unwrap_err());
        assert_eq!(line, 3);
        assert!(why.contains("expected 3 fields, found 2"));

        assert!(Record::parse(1, "1,Bran,1.00,extra").is_err());
    }

    #[test]
    fn test_parse_record_bad_id() {
        let (line, why) = reason(Record::parse(7, "one,Bran,1.00").unwrap_err());
        assert_eq!(line, 7);
        assert!(why.contains("Invalid order id"));
    }

    #[test]
    fn test_parse_record_bad_price() {
        let (_, why) = reason(Record::parse(2, "1,Bran,cheap").unwrap_err());
        assert!(why.contains("Invalid price"));
    }

    #[test]
    fn test_parse_record_empty_name() {
        let (_, why) = reason(Record::parse(2, "1, ,1.00").unwrap_err());
        assert_eq!(why, "empty product name");
    }

    #[test]
    fn test_parse_records_skips_blank_lines() {
        let records = parse_records("1,Bran,14.72\n\n2,Allspice,64.74\n").unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].line, 3);
        assert_eq!(records[1].order_id, OrderId::new(2));
    }

    #[test]
    fn test_parse_records_stops_at_first_error() {
        let err = parse_records("1,Bran,14.72\n2,Allspice\n3,Oats,x\n").unwrap_err();
        assert_eq!(reason(err).0, 2);
    }
}
