//! Hand-picked CodeChef problems used when the live API returns too little.

/// `(code, title)` in the order ids are handed out.
pub const CODECHEF: &[(&str, &str)] = &[
    ("HELLO", "Life, the Universe, and Everything"),
    ("INTEST", "Enormous Input Test"),
    ("HS08TEST", "ATM"),
    ("FLOW001", "Add Two Numbers"),
    ("FLOW002", "Find Remainder"),
    ("FLOW004", "First and Last Digit"),
    ("FLOW006", "Sum of Digits"),
    ("FLOW007", "Reverse The Number"),
    ("FLOW008", "Helping Chef"),
    ("FLOW009", "Total Expenses"),
    ("FLOW010", "ID and Ship"),
    ("FLOW011", "Salary"),
    ("FLOW013", "Valid Triangles"),
    ("FLOW014", "Grade The Steel"),
    ("FLOW016", "GCD and LCM"),
    ("FLOW017", "Second Largest"),
    ("FLOW018", "Smallest Numbers of Notes"),
    ("FCTRL", "Factorial"),
    ("COINS", "Bytelandian Gold Coins"),
    ("LAPIN", "Lapindromes"),
    ("CNOTE", "Chef and Notebooks"),
    ("VOTERS", "Voters List"),
    ("RECIPE", "Recipe Reconstruction"),
    ("CLEANUP", "Cleaning Up"),
    ("HORSES", "Racing Horses"),
    ("CIELAB", "Ciel and A-B Problem"),
    ("MAXDIFF", "Maximum Weight Difference"),
    ("CHN15A", "Mutated Minions"),
    ("RAINBOWA", "Rainbow Array"),
    ("LADDU", "LADDU"),
    ("CHEFSTUD", "Chef and Study"),
    ("BENDSP", "Bending Spoons"),
    ("OJUMPS", "Observing the Jumps"),
    ("SALARY", "Little Elephant and Salary"),
    ("RRCOPY", "Copy-paste"),
    ("ANUDTC", "Anuradha and Distance"),
    ("CHEFDETE", "Chef and Detective"),
    ("PRGIFT", "Programmer and the Gift"),
    ("SEGM01", "Bear and Segment 01"),
    ("CHRL4", "Chef and Rainbow Lights"),
    ("KTTABLE", "Kitchen Timetable"),
    ("ADAKING", "Ada King"),
    ("TREEFUN", "Tree Fun"),
    ("GOODSET", "Good Set"),
    ("COMPILER", "Compiler"),
    ("CARDSHUF", "Card Shuffle"),
    ("MEDIAN", "Median"),
    ("DIVSET", "Divisibility Set"),
    ("GRID", "Grid"),
    ("MATHL", "Math is Love"),
    ("PRIME1", "Prime Generator"),
    ("SPOJ", "Small factorials"),
    ("FCTRL2", "Small factorials"),
    ("GCDQ", "GCD and Queries"),
    ("TSORT", "Turbo Sort"),
    ("SUMTRIAN", "Sum of triangles"),
    ("SUBINC", "Subsequence Increment"),
    ("MAXSUB", "Maximum Subsequence"),
    ("PALIN", "The Next Palindrome"),
    ("FASHION", "Fashion Shows"),
    ("CARVANS", "Carvans"),
    ("MARCHA1", "Polo the Penguin and the Marching"),
    ("IPCTRN", "Polo the Penguin and the Test"),
    ("AMSGAME1", "Guess the Number"),
    ("AMSGAME2", "Subtraction Game 2"),
    ("TLG", "The Lead Game"),
    ("LUCKFOUR", "Lucky Four"),
    ("NUMGAME", "Number Game"),
    ("TRICOIN", "Coins and Triangle"),
    ("SMPAIR", "The Smallest Pair"),
    ("HOLES", "Bear and Polynomials"),
    ("CHEFPATH", "Chef and his daily routine"),
    ("MATSUM", "Matrix Summation"),
    ("FLIP", "Chef and Sign Sequences"),
    ("MSTICK", "Chopsticks"),
    ("RESQ", "Restaurant"),
    ("NAME2", "Chef and his Sequence"),
    ("STONES", "Pebbles"),
    ("BUYING2", "Buying Sweets"),
    ("CONFLIP", "Coin Flip"),
    ("PERMUT2", "Ambiguous Permutations"),
    ("CHEFSIGN", "Chef and Sign Sequences"),
    ("TRISQ", "Counting Triangles"),
    ("MGAME", "Mahesh and his Lost Array"),
    ("LECANDY", "Little Elephant and Candies"),
    ("LEPERMUT", "Little Elephant and Permutations"),
    ("MULTHREE", "Multiple of 3"),
    ("SNACKDOWN", "Snackdown Elimination"),
    ("MAXTAX", "Maximise Sum"),
    ("REVERSE", "Reverse Coding"),
    ("CHEFSUM", "Little Chef and Sums"),
    ("COOLING", "Cooling Pies"),
    ("CFRTEST", "Codeforces Rating"),
    ("PHYSICS", "Kinematics"),
    ("CHEFFA", "Chef and Subarrays"),
    ("STRPALIN", "Palindromic substrings"),
    ("STACKS", "Stacks"),
    ("JOHNY", "Uncle Johny"),
    ("DIVIDING", "Dividing Stamps"),
    ("CHEFRUN", "Chef and Running"),
    ("CHEFSTR1", "Chef and String"),
    ("COOK82A", "Chef and Digits"),
    ("COOK82B", "Chef and his Cake"),
    ("MUFFINS3", "Muffins"),
    ("TABLET", "Tablet"),
    ("SNCKYEAR", "Snackdown Year"),
    ("CHEFAPAR", "Chef and Apartment"),
];
