static WEATHER_NOMINAL_SCHEMA: &str = "\
outlook: sunny,overcast,rainy
temperature: hot,mild,cool
humidity: high,normal
windy: TRUE,FALSE
play: yes,no
";

static WEATHER_NOMINAL_DATA: &str = "\
sunny,hot,high,FALSE,no
sunny,hot,high,TRUE,no
overcast,hot,high,FALSE,yes
rainy,mild,high,FALSE,yes
rainy,cool,normal,FALSE,yes
rainy,cool,normal,TRUE,no
overcast,cool,normal,TRUE,yes
sunny,mild,high,FALSE,no
sunny,cool,normal,FALSE,yes
rainy,mild,normal,FALSE,yes
sunny,mild,normal,TRUE,yes
overcast,mild,high,TRUE,yes
overcast,hot,normal,FALSE,yes
rainy,mild,high,TRUE,no
";

pub fn load_weather_nominal_raw_data() -> (&'static str, &'static str) {
    (WEATHER_NOMINAL_SCHEMA, WEATHER_NOMINAL_DATA)
}
