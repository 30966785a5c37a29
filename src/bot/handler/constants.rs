/* Fixed texts sent by the bot.
 * Messages sent in HTML parse mode must keep their markup balanced.
 */

pub const GREETING_MESSAGE: &str = "📊 <b>Pathly Labs — Market Insight</b>\n\n\
Send a stock symbol like:\n\
<b>TCS</b>, <b>INFY</b>, <b>RELIANCE</b>\n\n\
<i>Educational market insights only.</i>";

pub const USAGE_EXAMPLES_MESSAGE: &str =
    "Send a stock symbol like:\n<b>TCS</b>, <b>INFY</b>, <b>RELIANCE</b>";

pub const DISCLAIMER_MESSAGE: &str = "Educational market insights only.";

pub const INVALID_SYMBOL_MESSAGE: &str =
    "❌ Please send a valid NSE stock symbol.\nExample: TCS, INFY, RELIANCE";
