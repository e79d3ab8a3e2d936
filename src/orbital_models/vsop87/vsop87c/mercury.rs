//! VSOP87C series for Mercury: heliocentric X, Y, Z on the ecliptic and equinox of date.

use std::f64::consts::PI;

use super::super::{Reference, Term, Variables, Vsop87Table};

const X0: &[Term] = &[
    [0.37749277893, 4.40259139579, 26088.1469590577],
    [0.11918926148, 4.49027758439, 0.2438174835],
    [0.03840153904, 1.17015646101, 52176.0501006319],
    [0.00585979278, 4.22090402969, 78263.95324220609],
    [0.00305833424, 2.10298673336, 26087.65932409069],
    [0.00105974941, 0.9884651742, 104351.8563837803],
    [0.00024906132, 5.26305668971, 52175.56246566489],
    [0.00021056065, 4.03921104994, 130439.75952535449],
    [0.00004441671, 0.80677167456, 156527.6626669287],
    [0.00003347442, 2.10873209401, 78263.46560723908],
    [0.00000976617, 3.85751708019, 182615.56580850287],
    [0.00000703903, 4.46040321768, 24978.7684069643],
    [0.00000640528, 1.20142454428, 27197.5255111511],
    [0.00000558149, 5.21749759764, 104351.36874881329],
    [0.00000447775, 2.97591075236, 1059.6257476727],
    [0.00000400281, 1.86944903196, 20426.8149099055],
    [0.00000283882, 3.79350724209, 31749.4790082099],
    [0.00000191007, 4.27537754512, 53285.4286527253],
    [0.00000181454, 4.95018365158, 1109.1347346099],
    [0.00000193895, 0.67633415224, 4552.1973145423],
    [0.00000221371, 0.62507677073, 208703.46895007708],
    [0.00000139001, 1.22954955274, 51066.6715485385],
    [0.00000183933, 1.19500306041, 5661.0882316687],
    [0.00000153303, 2.68451868547, 51116.6681704427],
    [0.00000104855, 2.02959651352, 130439.27189038748],
    [0.00000115202, 0.56691147306, 57837.3821497841],
    [0.00000090628, 0.25792152823, 529.9347825781],
    [0.00000075318, 6.07215712399, 27147.5288892469],
    [0.00000072957, 5.00412566043, 21536.1934619989],
    [0.00000074803, 4.92914440147, 46514.7180514797],
    [0.0000006871, 0.20379815554, 25132.5472174491],
    [0.00000083504, 3.17939445535, 10213.5293636945],
    [0.00000060985, 5.45128332631, 27043.7467006663],
    [0.00000057987, 5.70479654236, 14765.48286075331],
    [0.00000060953, 5.00244327341, 47624.0966035731],
    [0.00000053356, 2.29756051926, 26617.8379241523],
    [0.00000054964, 5.31144278536, 12566.3955174663],
    [0.00000047881, 1.04626983477, 79373.33179429949],
    [0.00000051263, 3.53744966658, 426.8420083595],
    [0.00000051361, 3.67582188055, 234791.37209165128],
    [0.00000050374, 3.60286953784, 25558.4559939631],
    [0.00000048449, 3.51993896091, 1589.3167127673],
    [0.00000048867, 5.73548681205, 77204.5713120169],
    [0.00000034739, 5.6851048903, 51646.3591355373],
    [0.00000032851, 2.99883640297, 955.3559241251],
    [0.00000044998, 2.48247314947, 41962.7645544209],
    [0.00000031618, 6.23993881626, 37410.8110573621],
    [0.00000028634, 0.71509820566, 30640.1004561165],
    [0.0000003148, 4.2807544332, 77154.57469011268],
    [0.00000032102, 3.61877734434, 83925.28529135829],
    [0.0000002767, 0.34889366405, 39609.8984006491],
    [0.00000026872, 6.26000952694, 36301.4325052687],
    [0.00000023054, 2.29052909388, 53131.6498422405],
    [0.00000026193, 3.69823179514, 11322.42028082089],
    [0.00000021235, 5.11548231564, 156527.17503196167],
    [0.00000026946, 1.76252593609, 6283.3196674749],
    [0.00000020875, 5.66887296875, 15874.8614128467],
    [0.00000016454, 1.69895735267, 72602.62119305388],
    [0.00000016101, 3.2262007316, 9104.1508116011],
    [0.00000022241, 4.03643224642, 13521.50762410789],
    [0.00000021188, 1.77076461428, 73711.99974514729],
    [0.00000015123, 2.81544648697, 18849.4713674577],
    [0.00000017255, 4.95346284309, 27197.03787618409],
    [0.00000017287, 2.12451701243, 51749.45190975589],
    [0.00000013862, 2.86403540216, 53235.43203082109],
    [0.00000015239, 0.3959193436, 7238.4317741165],
    [0.00000016863, 2.14228359969, 50586.97720534809],
    [0.00000013546, 5.21986559185, 52705.7410657265],
    [0.00000013134, 5.78471170881, 25028.7650288685],
    [0.00000014145, 3.03635370573, 63498.71419893629],
    [0.00000013081, 1.77889761864, 26068.47719815791],
    [0.00000013058, 3.88464356096, 26107.81671995749],
    [0.00000013609, 3.25855054515, 51220.4503590233],
    [0.00000013539, 2.5029396482, 103292.47445359109],
    [0.00000012138, 0.44338161953, 260879.27523322543],
    [0.00000011433, 1.98105303514, 19317.43635781211],
    [0.00000010174, 2.39402085953, 77734.26227711148],
    [0.00000012016, 5.53519559373, 68050.66769599509],
    [0.00000012094, 4.09914561799, 105461.23493587368],
    [0.00000009215, 2.48225447254, 40853.3860023275],
    [0.00000009157, 2.82670347755, 33326.8225506577],
    [0.00000009552, 2.11034031277, 38654.2986590405],
    [0.000000125, 3.8924443769, 45892.9742506405],
    [0.00000008978, 0.47617343198, 26084.2656236997],
    [0.00000008975, 5.18743195952, 26092.0282944157],
    [0.0000001216, 3.40664771625, 65697.80154222329],
    [0.0000000888, 0.33806954264, 26514.7451499337],
    [0.00000008892, 0.74770854519, 3442.81876244891],
    [0.00000008503, 0.38676770328, 110013.18843293248],
    [0.00000010244, 2.50326457964, 21535.70582703189],
    [0.00000008816, 4.86930066154, 32371.2228090491],
    [0.00000009705, 5.44815918458, 529.44714761109],
    [0.00000007663, 3.73484444482, 56728.0035976907],
    [0.00000007852, 0.65554683317, 5661.5758666357],
    [0.00000008166, 0.32786623322, 27677.2198543415],
    [0.00000007299, 1.14994821071, 6770.46678376209],
    [0.00000007437, 3.67894554888, 32858.8575603033],
    [0.00000007796, 1.18993742629, 31748.99137324289],
    [0.00000006786, 2.43978460253, 43072.1431065143],
    [0.00000007408, 4.54789639858, 23869.3898548709],
    [0.00000005938, 5.34593352715, 79219.55298381469],
    [0.00000007553, 1.04863475066, 103242.47783168689],
    [0.00000005988, 3.04417882527, 62389.33564684289],
    [0.00000006154, 5.99522472277, 59414.7256922319],
    [0.00000006213, 0.75145729813, 19805.0711090663],
    [0.00000006507, 1.06344526474, 213.5429129215],
    [0.00000006284, 4.91987886888, 22645.57201409229],
    [0.00000006068, 4.82277476434, 99799.90288672148],
    [0.00000006276, 2.74748364541, 640.1411037975],
    [0.00000006192, 1.11265105508, 28306.90406324449],
    [0.00000006081, 5.23278439947, 25874.8478636197],
    [0.00000004693, 6.19313162709, 16983.75232997309],
    [0.00000004527, 1.91140424398, 182615.07817353585],
    [0.00000005085, 0.33812112463, 26301.4460544957],
    [0.00000004658, 4.11167846402, 26095.2605060585],
    [0.00000005323, 2.15023457135, 24978.28077199729],
    [0.00000004497, 1.59603827995, 26081.03341205689],
    [0.00000005479, 5.17786692376, 76674.88034692229],
    [0.00000003898, 4.75161525594, 98690.52433462809],
    [0.00000005352, 5.17556723587, 77837.35505133009],
    [0.00000003694, 0.48936321493, 58946.76070187749],
    [0.00000003631, 5.5535734318, 129380.37759516528],
    [0.00000004821, 3.64928863412, 37410.32342239509],
    [0.00000003323, 1.95435021777, 78793.64420730069],
    [0.00000003932, 0.76247078505, 29530.7219040231],
    [0.00000004022, 4.06373546409, 2119.00767786191],
    [0.00000003208, 5.89844713322, 25557.96835899609],
    [0.00000003611, 0.17577280462, 91785.70468379749],
    [0.00000003062, 5.92483558903, 79323.33517239528],
    [0.0000000348, 0.66265476262, 71980.8773922147],
    [0.00000003093, 2.30327965785, 94138.57083756929],
    [0.00000003172, 3.00172025362, 27043.2590656993],
    [0.00000002912, 3.49412631679, 286967.1783747996],
    [0.00000003746, 6.08415745758, 89586.6173405105],
    [0.0000000287, 5.51397391523, 69160.04624808849],
    [0.0000000273, 5.88663339742, 44937.3745090319],
    [0.00000002725, 5.42457603553, 103822.16541868569],
    [0.00000003214, 4.87298940652, 2218.51328670329],
    [0.0000000266, 4.82966654366, 52156.38033973211],
    [0.00000003257, 2.71278189877, 25934.3681485729],
    [0.0000000262, 5.77949301476, 20426.32727493849],
    [0.00000003227, 2.95128548648, 26241.9257695425],
    [0.00000003086, 0.02730531846, 77308.35350059748],
    [0.00000003099, 0.86870364149, 131549.1380774479],
    [0.00000002731, 0.19114675485, 149.8070146181],
    [0.00000002486, 3.12136440583, 1052.51220067191],
    [0.00000003167, 0.38944502659, 33326.33491569069],
    [0.0000000268, 0.65295917827, 52195.71986153169],
    [0.00000002231, 3.43792316659, 136101.0915745067],
    [0.00000002653, 1.68316051523, 7.3573644843],
    [0.00000002074, 4.9631606732, 48733.47515566649],
    [0.00000001974, 5.1696218889, 64742.2018006147],
    [0.00000002064, 0.21494181057, 51116.18053547569],
    [0.00000002533, 6.02031593619, 1066.7392946735],
    [0.00000001949, 1.6871418105, 58459.1259506233],
    [0.0000000201, 2.44539246304, 16984.2399649401],
    [0.00000001876, 0.4924903664, 82815.90673926489],
    [0.00000001832, 1.95461512625, 52179.9314359899],
    [0.00000002306, 4.20103483106, 54394.80720481869],
    [0.00000001837, 5.53329054515, 66941.2891439017],
    [0.00000001783, 1.94386918249, 25620.1819687033],
    [0.00000001826, 3.52694014247, 52172.1687652739],
    [0.00000001791, 5.32229718021, 25661.5487681817],
    [0.00000002126, 2.91445652095, 51536.15281431789],
    [0.00000001714, 3.72047839107, 26556.11194941211],
    [0.00000001972, 5.03869626311, 45405.3394993863],
    [0.00000001711, 1.113200042, 32858.36992533629],
    [0.00000001643, 3.40283361772, 52602.6482915079],
    [0.00000001665, 3.83085129266, 5327.7199258663],
    [0.0000000193, 5.78785787875, 13656.10430865991],
    [0.00000001655, 1.59098456165, 125887.80602829569],
    [0.00000001554, 3.40019334049, 13521.9952590749],
    [0.00000001517, 3.39842653971, 53765.1229959157],
    [0.0000000187, 4.09951350071, 129330.38097326108],
    [0.00000001705, 6.14540598785, 43071.65547154729],
    [0.00000001683, 4.32584442162, 52168.93655363109],
    [0.00000001449, 6.1044820441, 88477.23878841709],
    [0.00000001466, 5.27211735766, 24499.0740637739],
    [0.00000001655, 6.12815645892, 76.50988875911],
    [0.00000001539, 2.1217695342, 105307.45612538888],
    [0.00000001542, 1.96595530367, 102762.78348849648],
    [0.000000014, 1.26185265808, 26081.51840015769],
    [0.000000014, 4.40173881619, 26094.77551795771],
    [0.00000001415, 1.31785110641, 49957.2929964451],
    [0.00000001545, 2.7446051713, 85502.6288338061],
    [0.00000001259, 4.06949140437, 51962.7510051939],
    [0.00000001464, 1.9432876919, 103925.25819290428],
    [0.00000001265, 6.23687279994, 35192.0539531753],
    [0.00000001563, 1.53248979312, 6681.46867088311],
    [0.00000001517, 4.1415824991, 213.0552779545],
    [0.00000001171, 4.44560816323, 57836.89451481709],
    [0.00000001547, 3.4369933753, 52389.3491960699],
    [0.00000001423, 1.60092130514, 50057.2862402535],
    [0.00000001238, 0.84389836177, 52183.1636476327],
    [0.0000000107, 5.82812348558, 26728.0442453717],
    [0.0000000102, 3.63373915432, 12431.79883291429],
    [0.00000000965, 2.32109036696, 155468.28073673949],
    [0.00000001018, 5.37034692069, 24498.58642880689],
    [0.00000000994, 3.22732624356, 117873.60782537168],
    [0.00000001002, 4.98556762896, 208702.98131511008],
    [0.00000001214, 2.58462840069, 25661.06113321469],
    [0.00000000958, 1.52001998159, 124778.42747620228],
    [0.00000000893, 3.52720868596, 85034.66384345168],
    [0.00000000875, 1.72393184919, 74821.37829724069],
    [0.00000000871, 0.27938200831, 1059.1381127057],
    [0.0000000091, 3.71329662418, 98068.78053378889],
    [0.00000000827, 2.44624289116, 22645.08437912529],
    [0.00000000829, 4.98909621401, 104881.54734887488],
    [0.0000000087, 5.31437509457, 51066.18391357149],
    [0.00000000978, 6.15736380216, 38520.1896094555],
    [0.00000000915, 1.34262350391, 6.86972951729],
    [0.00000000855, 2.53346806421, 51123.7817174435],
    [0.00000000795, 5.35307581508, 120226.47397914348],
    [0.00000000778, 6.26214759185, 11322.9079157879],
    [0.00000000913, 5.46819895663, 52026.4869034973],
    [0.0000000093, 2.84523614939, 115674.52048208468],
    [0.00000000932, 3.80512706428, 55618.6250455973],
    [0.00000000707, 0.26168602915, 313055.08151637384],
    [0.00000000803, 3.92107317901, 157637.04121902207],
    [0.0000000073, 2.20347820113, 53284.94101775829],
    [0.00000000725, 2.69780707537, 105411.23831396949],
    [0.00000000788, 5.97840774266, 3340.8562441833],
    [0.00000000867, 5.9237615624, 51109.55462344189],
    [0.00000000718, 2.1816472446, 129910.06856025988],
    [0.00000000688, 0.6182327982, 419.72846135871],
    [0.0000000071, 2.26735831674, 95247.94938966268],
    [0.00000000694, 5.40455859489, 26617.35028918529],
    [0.00000000621, 1.24687546366, 4551.7096795753],
    [0.00000000661, 4.3511895544, 10213.0417287275],
    [0.00000000674, 0.8692362811, 28206.9108194361],
    [0.00000000609, 1.59724799045, 78244.2834813063],
    [0.00000000661, 5.76395663117, 52022.2712901471],
    [0.00000000741, 3.07875547199, 103396.25664217169],
    [0.00000000585, 0.20603891239, 162188.99471608087],
    [0.00000000599, 1.83731791923, 46848.5739922491],
    [0.00000000634, 4.05934263309, 39609.41076568209],
    [0.00000000731, 3.42015997539, 433.9555553603],
    [0.00000000591, 2.65948363134, 71025.27765060609],
    [0.00000000576, 2.53160242412, 47623.60896860609],
    [0.00000000545, 2.34985134231, 48732.98752069949],
    [0.00000000528, 4.82834838426, 23754.95056618569],
    [0.00000000531, 6.23166694924, 41962.27691945389],
    [0.00000000525, 2.2273758322, 10022.0810975829],
    [0.00000000578, 0.96705890639, 80482.71034639288],
    [0.00000000675, 6.00003515273, 52329.8289111167],
    [0.00000000664, 5.96665839431, 77624.05595589208],
    [0.00000000541, 2.93745553127, 6282.83203250789],
    [0.00000000639, 4.14642362107, 45494.82524723229],
    [0.00000000594, 3.31128236497, 7994.77225950771],
    [0.00000000467, 4.75719880131, 84547.0290921975],
    [0.00000000552, 5.81449540251, 52099.7840293563],
    [0.0000000049, 2.96490072888, 64608.09275102969],
    [0.00000000553, 2.3974274308, 1692.40948698591],
    [0.00000000456, 1.94416761157, 90830.10494218889],
    [0.0000000047, 3.29329750332, 26237.7101561923],
    [0.00000000501, 4.18799339117, 25132.0595824821],
    [0.00000000615, 3.70395803529, 78283.62300310588],
    [0.00000000441, 6.26869790938, 27140.41534224609],
    [0.00000000445, 4.64236190444, 151975.7091698699],
    [0.00000000437, 5.66855783361, 20760.1832157079],
    [0.00000000472, 0.86711075193, 155418.2841148353],
    [0.00000000428, 3.39576463667, 77204.08367704989],
    [0.00000000469, 3.54106330325, 108903.8098808391],
    [0.00000000478, 0.48558080454, 63498.22656396929],
    [0.00000000448, 1.04430189969, 78256.83969520529],
    [0.00000000591, 1.9302839336, 853.4401992355],
    [0.00000000438, 3.00642339238, 51645.87150057029],
    [0.0000000044, 4.84626648414, 28306.41642827749],
    [0.00000000413, 3.60129277287, 38519.70197448849],
    [0.00000000456, 2.01311166346, 26038.1503371535],
    [0.00000000456, 3.65054925615, 26138.1435809619],
    [0.0000000047, 1.08701476541, 58946.27306691049],
    [0.00000000434, 2.3149942706, 29428.7593857575],
    [0.00000000439, 0.83378397651, 2333.44021035551],
    [0.00000000406, 2.5720315065, 1582.2031657665],
    [0.00000000419, 5.03633652112, 128850.68663007069],
    [0.00000000403, 0.84418373392, 28421.3433519297],
    [0.00000000423, 4.33257670397, 50586.48957038109],
    [0.0000000042, 5.00524088112, 78267.83457756409],
    [0.00000000508, 0.82135338502, 26720.93069837089],
    [0.00000000445, 4.23188832059, 1109.6223695769],
    [0.00000000452, 5.82726780405, 25985.0541848391],
    [0.0000000044, 1.02799745863, 78050.6541467681],
    [0.00000000427, 2.8336418336, 27154.6424362477],
    [0.00000000422, 2.30681425357, 93029.19228547589],
    [0.00000000387, 3.49964872741, 22747.5345323579],
    [0.00000000451, 6.18526475915, 26191.23973327629],
    [0.00000000525, 4.94137283297, 25455.3632197445],
    [0.00000000439, 2.68207148004, 46514.23041651269],
    [0.0000000039, 4.99420452598, 130013.16133447849],
    [0.00000000364, 0.17463222983, 78690.55143308209],
    [0.00000000468, 4.61226407005, 76145.18938182769],
    [0.00000000361, 2.87164735708, 114565.14192999128],
    [0.00000000354, 0.48572193966, 52644.0150909863],
    [0.00000000418, 0.29451759125, 78260.07190684808],
    [0.00000000366, 0.57462664693, 25028.27739390149],
    [0.00000000394, 0.21360682748, 78477.2523376441],
    [0.00000000337, 0.17366623994, 79853.02613748988],
    [0.00000000356, 5.33654783666, 633.0275567967],
    [0.00000000427, 4.30697428113, 19804.5834740993],
    [0.0000000036, 6.08031778998, 48835.43767393209],
    [0.00000000431, 4.76277333184, 30639.61282114949],
    [0.00000000336, 2.07023419375, 18208.05780571871],
    [0.00000000317, 4.36862743851, 76045.1961380193],
    [0.00000000403, 5.18083081721, 131395.3592669631],
    [0.000000003, 4.63629291392, 25973.70767037247],
    [0.00000000365, 5.5686843773, 25565.5695409639],
    [0.00000000417, 1.80624647547, 71493.2426409605],
    [0.00000000298, 1.0239471854, 26202.58624774291],
    [0.00000000411, 0.2567282281, 1596.43025976811],
    [0.00000000286, 1.16931638049, 52182.67865953191],
    [0.00000000304, 4.98265595281, 51708.08511027749],
    [0.00000000288, 2.94996952897, 26164.4130303333],
    [0.00000000326, 0.06254421557, 26610.72437715149],
    [0.00000000375, 3.57829900047, 26162.928557625],
    [0.00000000268, 6.27766671307, 143961.51096694588],
    [0.00000000367, 5.77470435266, 111590.53197538029],
    [0.00000000264, 4.93317721296, 72936.4771338233],
    [0.00000000301, 2.5880834893, 224.5886131854],
    [0.00000000286, 5.68119587232, 46848.0863572821],
    [0.00000000257, 5.37176115578, 181556.1838783137],
    [0.00000000352, 2.05335376553, 26013.3653604904],
    [0.00000000274, 1.10717834982, 956.53297345411],
    [0.00000000253, 0.21818001465, 75.0254160508],
    [0.00000000256, 2.6759209764, 537.0483295789],
    [0.00000000245, 4.84007767717, 51756.5654567567],
    [0.00000000286, 4.31029470055, 52169.42154173189],
    [0.00000000326, 1.57460855395, 25771.7550894011],
    [0.00000000252, 0.65486372524, 25668.6623151825],
    [0.00000000239, 3.45236126203, 42154.2128205325],
    [0.00000000324, 4.09374409332, 26404.5388287143],
    [0.00000000285, 1.43554886267, 1162.7185218913],
    [0.00000000237, 0.47964640927, 124156.68367536309],
    [0.00000000271, 1.47052171454, 15874.37377787969],
    [0.00000000307, 3.88495459836, 78271.06678920689],
    [0.00000000323, 1.4318031354, 19406.43447069109],
    [0.00000000245, 0.30807019834, 111122.56698502589],
    [0.00000000229, 3.58086611266, 36300.94487030169],
    [0.00000000243, 5.83259460773, 7238.9194090835],
    [0.00000000242, 5.89612108076, 51748.96427478889],
    [0.00000000275, 5.58726658873, 77211.68485901768],
    [0.00000000234, 1.35631291904, 83924.79765639128],
    [0.00000000279, 2.69169755313, 77197.45776501608],
    [0.0000000026, 4.4825707163, 32769.3718124573],
    [0.00000000222, 4.75592425527, 100909.28143881488],
    [0.00000000279, 4.668769018, 26507.63160293289],
    [0.00000000299, 4.60166208316, 2648.6986429565],
    [0.00000000213, 0.53490943339, 1479.11039154791],
    [0.00000000221, 2.46213816436, 102.84895673509],
    [0.00000000231, 5.89019952812, 141762.4236236589],
    [0.00000000208, 2.11068814642, 146314.3771207177],
    [0.00000000236, 3.31514829524, 14764.9952257863],
    [0.00000000219, 0.89003648017, 110.45013870291],
    [0.00000000241, 4.57135620023, 150866.3306177765],
    [0.0000000021, 0.69084085552, 183724.9443605963],
    [0.0000000028, 2.23623280041, 78114.39004507149],
    [0.00000000211, 1.74754356172, 130969.45049044909],
    [0.00000000244, 1.23689090868, 11610.7957758577],
    [0.00000000265, 2.55973299169, 39744.0074502341],
    [0.000000002, 0.58765256464, 16065.82204399129],
    [0.00000000222, 0.56541187975, 81706.5281871715],
    [0.00000000197, 2.6082441932, 52815.9473869459],
    [0.00000000197, 2.88503643876, 12565.9078824993],
    [0.00000000241, 3.88588376012, 27147.04125427989],
    [0.00000000205, 3.58973790844, 33968.23611239669],
    [0.00000000248, 0.88668879236, 71582.72838880648],
    [0.00000000246, 2.24144190197, 51742.33836275509],
    [0.00000000203, 2.34530658749, 25881.9614106205],
    [0.00000000202, 6.11911124355, 25448.2496727437],
    [0.00000000228, 1.77307991536, 234790.88445668426],
    [0.00000000198, 3.28340120527, 26294.33250749489],
    [0.00000000231, 2.35481338711, 44181.52165860769],
    [0.00000000185, 3.58471190592, 64607.60511606269],
    [0.00000000226, 1.07085750404, 7879.84533585549],
    [0.00000000176, 2.16160994172, 77154.08705514569],
    [0.00000000179, 1.96834324181, 14477.1073657165],
    [0.00000000195, 3.51218600925, 59414.23805726489],
    [0.00000000207, 5.8127428985, 1376.0176173293],
    [0.00000000174, 3.31014261106, 339142.984657948],
    [0.00000000174, 0.97426408403, 51543.2663613187],
    [0.00000000184, 6.1276813479, 129484.15978374588],
    [0.00000000173, 4.63181171916, 23968.89546371229],
    [0.00000000207, 1.74596827081, 20760.6708506749],
    [0.00000000166, 5.44721121225, 79372.84415933248],
    [0.00000000185, 2.73373869094, 103711.95909746629],
    [0.00000000161, 5.70596905124, 73711.51211018028],
    [0.00000000194, 3.2623626981, 50483.8844311295],
    [0.0000000022, 6.11849377619, 69159.55861312148],
    [0.00000000191, 5.22716664164, 155997.9717018341],
    [0.00000000216, 3.03668046944, 53131.16220727349],
    [0.00000000156, 4.03054314136, 106570.61348796709],
    [0.00000000181, 6.12275012681, 18093.13088206649],
    [0.00000000152, 2.52925607729, 78110.17443172129],
    [0.00000000149, 1.42595419867, 45892.48661567349],
    [0.00000000182, 5.31752226443, 121335.85253123689],
    [0.00000000155, 3.25690697601, 188276.8978576551],
    [0.00000000178, 5.74884910934, 131499.1414555437],
    [0.00000000166, 3.75288461237, 468.20880783791],
    [0.00000000157, 2.94486244891, 61279.9570947495],
    [0.00000000203, 3.72989631697, 51322.85371887989],
    [0.0000000019, 5.02157979409, 25874.36022865269],
    [0.00000000142, 3.08736192154, 50594.09075234889],
    [0.00000000175, 5.19081352879, 26624.9514711531],
    [0.00000000148, 4.64578202487, 104332.1866228805],
    [0.00000000153, 5.28337526633, 52101.26850206459],
    [0.00000000164, 2.33110807572, 74820.89066227368],
    [0.00000000158, 2.76429934042, 78417.73205269089],
    [0.0000000014, 2.46992319261, 52279.14287485049],
    [0.00000000163, 0.92047983596, 25780.58933808811],
    [0.0000000016, 4.73851791777, 26395.7045800273],
    [0.00000000132, 4.64443067312, 22760.01130277751],
    [0.00000000129, 4.81820902062, 54394.31956985169],
    [0.0000000015, 0.46939872247, 104371.52614468009],
    [0.00000000166, 0.65776448592, 522.8212355773],
    [0.00000000149, 4.09099834194, 23889.0596157707],
    [0.00000000125, 0.99047205683, 65697.31390725628],
    [0.00000000127, 3.92999950538, 54294.81396101029],
    [0.00000000136, 1.42756921141, 102233.09252340188],
    [0.0000000014, 3.82491395518, 52808.83383994509],
    [0.00000000171, 2.58259586325, 78187.68717093048],
    [0.00000000119, 1.41260374923, 178063.6123114441],
    [0.00000000121, 3.91577422121, 181506.18725640947],
    [0.0000000015, 2.94179740209, 13362.6935242827],
    [0.0000000016, 2.07478360203, 955.8435590921],
    [0.00000000122, 2.54246856782, 52072.9573264133],
    [0.00000000139, 5.71618549148, 97113.18079218028],
    [0.00000000116, 4.06977577347, 104344.74283677948],
    [0.00000000127, 0.21852764054, 26521.8586969345],
    [0.00000000113, 1.8180853578, 154938.58977164488],
    [0.00000000116, 1.53733085408, 110634.93223377169],
    [0.0000000012, 4.73916175135, 23969.3830986793],
    [0.00000000117, 2.35333449828, 18093.6185170335],
    [0.00000000114, 0.81259306552, 25754.2910182883],
    [0.0000000015, 0.60833287071, 25551.34244696229],
    [0.00000000109, 2.00086908622, 40565.01050729069],
    [0.0000000011, 2.3626420711, 24176.9474758405],
    [0.00000000107, 0.12185511336, 68242.11596210669],
    [0.00000000112, 4.84462127363, 26422.0028998271],
    [0.00000000107, 5.97982710676, 90695.99589260388],
    [0.00000000104, 1.75659774658, 156101.06447605268],
    [0.00000000111, 4.9988992386, 116918.00808376308],
    [0.00000000121, 1.5684935635, 28287.2343023447],
    [0.00000000108, 6.08227647204, 44181.03402364069],
    [0.00000000102, 4.15125783923, 26198.3532802771],
    [0.00000000143, 5.40448013475, 50579.86365834729],
    [0.00000000108, 1.57765174204, 26107.32908499049],
    [0.00000000103, 1.01910656324, 29416.28261533789],
    [0.00000000102, 2.83999953225, 74923.34081550628],
    [0.00000000111, 3.14675866322, 51639.24558853649],
    [0.000000001, 5.42391958785, 25035.8785758693],
    [0.00000000097, 5.13819824333, 323.74923414091],
    [0.000000001, 3.26784777828, 104565.15547921829],
    [0.00000000099, 0.40287203553, 31415.6230674405],
    [0.0000000012, 0.30671438664, 134991.71302241329],
    [0.00000000131, 2.63461906713, 647.25465079831],
    [0.00000000128, 4.13013360989, 104138.55728834229],
    [0.0000000011, 0.16249290358, 24357.0246061251],
    [0.00000000105, 5.76370877998, 26067.9895631909],
    [0.00000000095, 2.53553314645, 52705.25343075949],
    [0.00000000105, 5.29014619681, 55516.6625273317],
    [0.00000000093, 5.06220815245, 52126.05347872769],
    [0.00000000092, 3.8902268297, 54509.2464935039],
    [0.00000000096, 3.48344687819, 743.23387801611],
    [0.00000000109, 4.33764824375, 632.5399218297],
    [0.0000000009, 3.28421553573, 27999.3464422749],
    [0.00000000094, 0.26566762837, 103291.98681862408],
    [0.00000000111, 4.40219993403, 40565.4981422577],
    [0.00000000101, 3.06854770182, 51951.70530492999],
    [0.00000000102, 1.7706020308, 104355.73771913828],
    [0.00000000088, 0.98000029962, 1588.82907780029],
    [0.00000000102, 5.00530419072, 26941.3433408097],
    [0.00000000109, 0.41184272678, 60056.13925397089],
    [0.00000000093, 5.48203494654, 27780.31262856009],
    [0.00000000089, 3.15455699832, 68050.18006102808],
    [0.00000000106, 3.72898790593, 6770.9544187291],
    [0.00000000101, 0.37716551293, 52250.8316991992],
    [0.00000000086, 0.0825137465, 52325.61329776649],
    [0.00000000092, 5.92652248722, 140653.0450715655],
    [0.00000000107, 1.95514516893, 157483.26240853727],
    [0.00000000087, 2.2593874086, 25938.5837619231],
    [0.00000000094, 4.55110857685, 51219.76094466129],
    [0.00000000089, 5.24168644118, 36109.9842391571],
    [0.00000000093, 3.23654834978, 103.3365917021],
    [0.00000000098, 5.50021939322, 27819.2693119903],
    [0.00000000084, 3.07323794777, 53228.31848382029],
    [0.00000000087, 4.71717400578, 52065.84377941249],
    [0.00000000099, 4.86243388147, 97581.14578253469],
    [0.00000000105, 5.43405944979, 70269.42480018188],
    [0.00000000083, 1.07166783581, 51219.96272405629],
    [0.00000000101, 0.37289734688, 52226.0467225361],
    [0.00000000087, 3.22552375788, 104778.45457465628],
    [0.00000000102, 6.17051419926, 12432.2864678813],
    [0.00000000082, 3.53594042739, 78731.91823256049],
    [0.00000000101, 5.35965052966, 119117.0954270501],
    [0.00000000108, 1.06265370367, 49527.59527515889],
    [0.00000000092, 4.58719441891, 51859.65823097529],
    [0.0000000008, 5.90301150782, 53242.5455778219],
    [0.00000000107, 3.33033819724, 25447.76203777669],
    [0.00000000088, 6.01318518947, 12725.20961729149],
    [0.00000000091, 3.91995839732, 26300.95841952869],
    [0.0000000008, 3.22630056109, 105940.92927906409],
    [0.00000000076, 1.13669532403, 102133.09927959349],
    [0.00000000079, 4.83610406929, 80482.22271142589],
    [0.00000000091, 4.23329610745, 51013.57539622409],
    [0.00000000094, 2.96601881549, 2222.1004520805],
    [0.00000000089, 2.52058786962, 137678.43511695447],
    [0.00000000075, 4.78568609813, 3327.89183879669],
    [0.00000000089, 0.85977762746, 1910.9556657337],
    [0.00000000098, 3.32594040773, 50056.79860528649],
    [0.00000000074, 1.41768963459, 25977.94063783829],
    [0.00000000089, 0.85266701038, 52492.4419702885],
    [0.00000000073, 5.13639330582, 50697.1835265675],
    [0.00000000102, 3.34303114673, 104347.97504842229],
    [0.00000000072, 3.04850836782, 170049.41410852008],
    [0.00000000078, 5.73381249578, 103285.36090659029],
    [0.00000000075, 1.55658438412, 52595.53474450709],
    [0.00000000074, 2.73392405787, 25021.6514818677],
    [0.00000000075, 1.65865555855, 77844.46859833089],
    [0.00000000078, 1.07533201236, 74.53778108379],
    [0.00000000094, 3.12911978302, 52698.62751872569],
    [0.00000000095, 5.99575918602, 25938.09612695609],
    [0.00000000087, 5.8235743328, 72602.13355808688],
    [0.0000000007, 5.67887850233, 27670.10630734069],
    [0.00000000076, 0.64559937719, 104358.96993078108],
    [0.00000000074, 5.28706150347, 25954.0379094727],
    [0.0000000007, 1.27402715914, 66653.40128383189],
    [0.00000000071, 3.97675324486, 24998.4381678641],
    [0.00000000073, 0.37426023469, 26222.2560086427],
    [0.00000000081, 4.55346032047, 8194.0315157251],
    [0.00000000066, 4.21780979859, 78270.58180110609],
    [0.00000000072, 1.38206164812, 426.3543733925],
    [0.00000000078, 5.284400823, 104202.2931866457],
    [0.00000000066, 3.65294907987, 89586.12970554348],
    [0.00000000081, 4.51389667692, 26080.54577708989],
    [0.00000000068, 2.13854484878, 207644.08701988787],
    [0.00000000065, 5.87225172961, 12546.72575656651],
    [0.00000000074, 3.91991873665, 97670.63153038069],
    [0.00000000067, 2.8216959855, 2111.8941308611],
    [0.00000000079, 5.28726952189, 77830.24150432929],
    [0.00000000083, 3.78654945074, 522.3336006103],
    [0.00000000079, 3.79951632035, 25446.73339731871],
    [0.00000000063, 6.083705977, 70268.93716521488],
    [0.00000000074, 2.8634603486, 95247.46175469569],
    [0.00000000085, 5.74305012713, 72935.98949885629],
    [0.00000000062, 3.50617407914, 150244.58681693728],
    [0.00000000081, 6.24341823549, 77733.77464214448],
    [0.00000000077, 1.16703890175, 316.6356871401],
    [0.00000000075, 1.0447135366, 33967.74847742969],
    [0.00000000071, 3.3359413209, 27684.3334013423],
    [0.00000000061, 4.37869496731, 846.3266522347],
    [0.00000000064, 1.68211518159, 27177.8557502513],
    [0.00000000073, 4.46095079744, 26083.7779887327],
    [0.00000000075, 1.85897859977, 26729.56052079669],
    [0.00000000071, 4.93586530137, 17893.8716258491],
    [0.00000000063, 4.07467864823, 52290.48938931711],
    [0.00000000072, 6.13433603432, 50800.27630078609],
    [0.00000000059, 1.40204104749, 52061.61081194667],
    [0.00000000077, 2.75393031467, 38813.6003938327],
    [0.0000000008, 0.16011950416, 26089.63143176599],
    [0.00000000069, 1.59730247279, 56727.51596272369],
    [0.0000000008, 5.51239927463, 26086.6624863494],
    [0.00000000058, 2.41520369138, 419.2408263917],
    [0.00000000066, 1.67365233236, 2008.8013566425],
    [0.00000000065, 2.06432984048, 66652.91364886488],
    [0.00000000058, 1.62097861042, 99024.38027539749],
    [0.00000000077, 2.3496667424, 103299.58800059189],
    [0.00000000069, 1.46687065035, 316.14805217309],
    [0.00000000061, 1.53694228847, 126997.18458038908],
    [0.00000000068, 3.36042091101, 137210.4701266001],
    [0.00000000058, 2.64478381351, 167850.32676523307],
    [0.00000000057, 2.63258373208, 26011.8808877821],
    [0.00000000062, 5.9141126994, 19316.9487228451],
    [0.00000000073, 2.88502409591, 26091.5406594487],
    [0.00000000055, 3.74371053813, 209812.84750217048],
    [0.00000000055, 5.12214562228, 44295.9609472929],
    [0.00000000058, 1.54167828285, 25508.4593720589],
    [0.00000000073, 0.48335623767, 18848.98373249069],
    [0.00000000056, 5.41229627249, 22625.9022531925],
    [0.00000000064, 0.50377008046, 77410.75686045409],
    [0.00000000054, 6.01642065343, 52252.31617190749],
    [0.00000000066, 1.74674543912, 77795.98825185168],
    [0.00000000055, 3.61457759506, 107794.43132874569],
    [0.00000000057, 5.00011319395, 24449.0774418697],
    [0.00000000055, 5.1627201071, 172402.28026229187],
    [0.00000000067, 1.36451686419, 19.42594341629],
    [0.00000000053, 2.13528819255, 32370.73517408209],
    [0.00000000052, 5.50451319252, 3340.36860921629],
    [0.00000000055, 5.18023594496, 220.6564599223],
    [0.00000000072, 4.73998437139, 24864.32911827909],
    [0.00000000052, 2.23631389572, 23868.9022199039],
    [0.0000000006, 3.578260411, 90695.50825763689],
    [0.00000000052, 5.67658506171, 26312.4917547596],
    [0.00000000053, 1.86041754394, 19406.9221056581],
    [0.00000000053, 4.13410058005, 26667.8345460565],
    [0.0000000007, 1.65225887205, 2199.33116077051],
    [0.00000000059, 5.1155700564, 38.3768531213],
    [0.00000000051, 1.23099026352, 58857.2749540315],
    [0.0000000005, 5.77314673421, 129799.86223904048],
    [0.00000000067, 1.08017341186, 78257.32468330608],
    [0.0000000005, 0.6385142503, 27727.2164762457],
    [0.00000000048, 4.17567122141, 27044.4361150283],
    [0.00000000047, 5.67782985051, 51969.8645521947],
    [0.00000000055, 4.78351928938, 157057.35363202327],
    [0.0000000006, 1.14600976483, 85034.17620848469],
    [0.00000000049, 3.86127420297, 77631.16950289288],
    [0.00000000064, 0.02229686602, 76571.78757270369],
    [0.00000000046, 2.81829667996, 77836.86741636308],
    [0.00000000054, 5.78884650295, 23919.3864767751],
    [0.00000000047, 2.89825161341, 155572.0629253201],
    [0.00000000064, 0.92372709577, 27311.96479983631],
    [0.00000000046, 6.08737593166, 76681.99389392308],
    [0.00000000046, 4.7663636101, 29530.2342690561],
    [0.00000000053, 5.00175567579, 49842.85370775989],
    [0.00000000055, 0.24135443971, 27037.32256802749],
    [0.00000000054, 3.68631996655, 949.4194264533],
    [0.00000000047, 0.24536622662, 29550.3916649229],
    [0.00000000056, 0.74089796514, 53234.94439585409],
    [0.00000000062, 0.02840313751, 26011.39325281509],
    [0.00000000051, 1.39538802358, 28736.6017845307],
    [0.00000000045, 4.11327342358, 55504.18575691209],
    [0.00000000062, 1.33928421875, 176954.23375935067],
    [0.00000000043, 5.66151866873, 78903.8505285201],
    [0.00000000044, 3.67807658881, 16703.3059509825],
    [0.00000000052, 4.49985681008, 110012.70079796549],
    [0.0000000005, 5.46692304514, 25138.9713500879],
    [0.00000000043, 4.35523617525, 1272.9248431107],
    [0.00000000044, 2.19769750104, 105460.74730090669],
    [0.00000000058, 1.25267627496, 26094.77287109149],
    [0.00000000042, 2.03273940863, 1486.2239385487],
    [0.00000000042, 2.0818602512, 78189.17164363878],
    [0.00000000048, 5.60414814999, 65831.9105918083],
    [0.00000000054, 0.13039414614, 52382.23564906909],
    [0.00000000041, 3.34731027231, 1795.5022612045],
    [0.00000000043, 1.03324982448, 60055.65161900389],
    [0.00000000046, 0.15692625477, 54087.2495838491],
    [0.00000000053, 4.84593569859, 260878.78759825832],
    [0.00000000048, 0.50977666152, 25466.4031582185],
    [0.00000000048, 5.15384836969, 26709.8907598969],
    [0.00000000048, 2.14565331737, 76667.76679992149],
    [0.00000000047, 5.63034544251, 104275.59031250469],
    [0.00000000039, 0.78144245702, 132658.5166295413],
    [0.0000000004, 1.64169511886, 26824.02347258949],
    [0.0000000004, 4.01282714257, 25352.2704455259],
    [0.00000000043, 0.07999630612, 365230.88779952226],
    [0.00000000044, 1.85242708019, 52712.85461272729],
    [0.00000000045, 6.15705935255, 28256.9074413403],
    [0.00000000039, 5.27554854731, 103241.99019671988],
    [0.00000000051, 1.99101186951, 182085.87484340827],
    [0.0000000005, 2.09130353046, 147423.7556728111],
    [0.00000000043, 0.02949186925, 214364.80099922928],
    [0.00000000039, 2.59117531794, 99799.41525175449],
    [0.00000000044, 5.29675829214, 25867.73431661889],
    [0.00000000043, 1.77519064144, 1265.81129610991],
    [0.00000000038, 5.81703538519, 104505.6351942651],
    [0.00000000037, 5.58241031795, 104198.0775732955],
    [0.00000000037, 4.53399815239, 128320.99566497609],
    [0.00000000042, 5.19727486409, 25170.2166730759],
    [0.0000000004, 5.22993102913, 206.42936592071],
    [0.00000000038, 3.52230881007, 130459.42928625426],
    [0.00000000037, 3.93629350281, 26102.3740530593],
    [0.0000000005, 0.24736089771, 153.5349930013],
    [0.00000000037, 1.67080581846, 24203.24579564031],
    [0.00000000041, 0.69210311059, 34282.4222922663],
    [0.00000000036, 3.01321329685, 26118.4738200621],
    [0.00000000036, 2.65041173436, 26057.82009805329],
    [0.00000000036, 4.58551065069, 34281.9346572993],
    [0.00000000042, 6.16382020852, 38653.81102407349],
    [0.00000000035, 1.73963103644, 26073.91986505609],
    [0.00000000039, 0.45985553144, 27006.0772450395],
    [0.00000000039, 5.40193552573, 151.2914873264],
    [0.00000000037, 5.43157910397, 78367.04601642469],
    [0.00000000034, 3.56564955468, 27567.01353312209],
    [0.00000000035, 0.56899615907, 78896.73698151928],
    [0.00000000037, 4.00811594346, 25773.96077918809],
    [0.00000000037, 1.65550908775, 26402.33313892731],
    [0.00000000045, 0.79814686706, 2126.1212248627],
    [0.00000000037, 5.12681406758, 9384.59719059169],
    [0.00000000033, 2.80453550266, 116783.89903417809],
    [0.00000000035, 2.62159531521, 27463.9207589035],
    [0.00000000033, 0.53015735881, 51852.54468397449],
    [0.00000000037, 1.41559511533, 130420.0897644547],
    [0.00000000035, 0.5776384005, 62388.84801187589],
    [0.00000000033, 1.99538084924, 26190.1094773233],
    [0.00000000033, 3.66824418197, 25986.18444079209],
    [0.00000000035, 3.17259770035, 51653.47268253809],
    [0.00000000032, 6.04952225858, 39629.56816154889],
    [0.0000000004, 4.40766389323, 148.32254190981],
    [0.00000000043, 2.52314764326, 157587.0445971179],
    [0.00000000034, 3.99284017002, 27973.04812247509],
    [0.00000000043, 0.54047908222, 26308.5596014965],
    [0.0000000004, 0.99428555932, 205.9417309537],
    [0.00000000034, 3.54482897451, 13541.17738500769],
    [0.00000000031, 0.68583013925, 207594.0903979837],
    [0.00000000032, 4.46011355827, 204151.51545301828],
    [0.00000000034, 3.97349842615, 51868.4924796623],
    [0.00000000043, 3.01518313757, 51529.03926731709],
    [0.00000000031, 5.5818457482, 78160.86046798748],
    [0.00000000036, 0.93475827193, 130226.46042991648],
    [0.0000000003, 0.82681675219, 130432.64597835368],
    [0.00000000039, 5.5949952709, 64901.5035354069],
    [0.00000000031, 2.16793872992, 51433.0600400993],
    [0.00000000041, 0.15772285796, 40852.8983673605],
    [0.00000000039, 1.91317014888, 76674.39271195528],
    [0.00000000031, 3.23141999011, 94330.01910368088],
    [0.0000000003, 4.87996329072, 181026.49291321906],
    [0.0000000003, 6.07201296464, 96356.84030678908],
    [0.00000000029, 4.81126203138, 182188.96761762688],
    [0.00000000034, 4.11459561196, 111122.07935005888],
    [0.00000000031, 4.20399330248, 26514.25751496669],
    [0.00000000036, 4.04094788403, 75615.49841673308],
    [0.00000000028, 1.0331039238, 86143.55476057807],
    [0.00000000028, 0.70757951529, 80382.71710258449],
    [0.00000000037, 4.30143869314, 37698.6989174319],
    [0.0000000003, 0.97985183975, 77101.47853779829],
    [0.00000000029, 4.41729316787, 114.6429243969],
    [0.0000000003, 4.17789908809, 26084.21480579459],
    [0.00000000027, 0.61831878834, 26241.4381345755],
    [0.00000000027, 4.67046992186, 60369.83779887349],
    [0.00000000027, 5.92007475132, 101011.24395708049],
    [0.00000000027, 1.62628759375, 52509.9060414013],
    [0.00000000029, 1.49521060767, 26092.07911232079],
    [0.00000000033, 6.04618436459, 42153.72518556549],
    [0.00000000033, 2.68337298749, 49954.19346603489],
    [0.00000000027, 0.40084478333, 25933.8805136059],
    [0.00000000027, 4.17930801308, 91785.21704883048],
    [0.00000000026, 2.02354598068, 35472.9879671329],
    [0.00000000034, 1.25359434355, 22004.1584523533],
    [0.00000000026, 4.6048123829, 71980.38975724769],
    [0.00000000026, 0.04548898361, 130653.05862079248],
    [0.00000000029, 4.59660921219, 136722.8353753459],
    [0.00000000035, 1.50172306531, 52483.6077216015],
    [0.00000000027, 4.62222063183, 54375.1374439189],
    [0.00000000026, 5.92161181229, 26050.0139234199],
    [0.00000000033, 6.20772055762, 77727.14873011068],
    [0.00000000031, 6.01164257984, 87367.86023632369],
    [0.00000000028, 5.00871771816, 183571.1655501115],
    [0.00000000034, 0.00412760548, 1905.70858242391],
    [0.00000000028, 2.05766266145, 51226.87449166209],
    [0.00000000032, 1.32626829577, 77307.66408623548],
    [0.00000000033, 6.12204372905, 78039.60844650418],
    [0.00000000031, 3.88641044819, 60370.3254338405],
    [0.00000000033, 2.48500437212, 123201.08393375449],
    [0.00000000027, 0.9189892906, 1224.06165826211],
    [0.00000000025, 3.43998049238, 78338.73484077338],
    [0.00000000029, 2.28677197427, 49842.36607279289],
    [0.00000000025, 1.89094361261, 76785.08666814168],
    [0.00000000024, 2.66952173476, 24824.9895964795],
    [0.00000000031, 3.35325440781, 161079.6161639875],
    [0.00000000031, 1.70259252563, 75930.75684933408],
    [0.00000000024, 3.24402392538, 1045.3986536711],
    [0.00000000029, 5.58510707424, 25600.5122078035],
    [0.00000000029, 0.07851795697, 26575.7817103119],
    [0.00000000026, 5.97420147293, 39450.5966658569],
    [0.00000000027, 0.73776364996, 27171.2271913513],
    [0.00000000027, 4.92586138125, 25005.0667267641],
    [0.00000000032, 0.79345370764, 9103.6631766341],
    [0.00000000024, 2.49242891465, 129373.26404816448],
    [0.00000000023, 0.40602877121, 85502.14119883909],
    [0.00000000024, 3.27434836834, 52609.7618385087],
    [0.00000000025, 4.99949553531, 299.37021175271],
    [0.00000000027, 1.76554597629, 143005.9112253373],
    [0.00000000027, 1.29828079538, 24073.1652872599],
    [0.00000000025, 5.44789800662, 25654.43522118089],
    [0.00000000024, 0.97156468916, 52286.25642185129],
    [0.00000000023, 5.2085073457, 38813.11275886569],
    [0.00000000026, 4.38403477094, 27676.73221937449],
    [0.00000000023, 2.99428107393, 27351.3043216359],
    [0.00000000025, 1.41127895754, 48847.9144443517],
    [0.00000000028, 4.21226965873, 24925.6722546499],
    [0.00000000029, 4.41166263353, 30172.1354657621],
    [0.00000000026, 1.50614892755, 78153.74692098668],
    [0.00000000023, 2.83196594205, 50064.3997872543],
    [0.00000000024, 1.97684419653, 51962.26337022689],
    [0.00000000023, 1.32747738833, 77947.56137254949],
    [0.00000000023, 1.63082397395, 123669.0489241089],
    [0.00000000022, 1.83245731848, 78213.95662030189],
    [0.00000000025, 5.93871501925, 26725.1432310819],
    [0.00000000025, 6.00809531914, 25451.1506870335],
    [0.00000000022, 5.41900898206, 50264.8506174147],
    [0.0000000003, 2.27535725604, 53907.1724535645],
    [0.0000000003, 2.41447471924, 23754.46293121869],
    [0.00000000025, 3.3310607736, 1.7282901918],
    [0.00000000025, 3.3310607736, 1.24065522479],
    [0.00000000024, 6.19145581405, 78786.53066029989],
    [0.00000000022, 3.40212459403, 6885.39370741431],
    [0.00000000025, 0.11282707964, 130435.87818999648],
    [0.00000000022, 3.21338836945, 50444.9277476993],
    [0.00000000028, 6.25386153205, 6129.5408569901],
    [0.00000000025, 4.36482847694, 28103.1286308555],
    [0.00000000023, 2.05346110066, 103918.14464590348],
    [0.00000000025, 2.29706808754, 52174.56562792359],
    [0.00000000022, 1.18783541749, 2219.0009216703],
    [0.00000000022, 3.88895575058, 78580.34511186268],
    [0.00000000029, 2.91258588959, 1730.87853544909],
    [0.00000000022, 0.65836013072, 80597.1496350781],
    [0.00000000024, 3.86546209537, 51842.1941598625],
    [0.0000000002, 0.9329536677, 51955.63745819309],
    [0.00000000028, 2.18732774825, 536.5606946119],
    [0.0000000002, 3.94160971202, 23439.20449861769],
    [0.00000000023, 5.40527491438, 129387.49114216608],
    [0.00000000021, 5.54505025605, 163766.3382585287],
    [0.00000000025, 2.01245845269, 81604.56566890588],
    [0.00000000021, 3.0123287603, 1063.55790093581],
    [0.00000000023, 4.96870238168, 16342.8264032011],
    [0.00000000022, 2.15856505754, 96357.32794175608],
    [0.00000000023, 1.14266322173, 76144.70174686068],
    [0.0000000002, 1.29887924947, 51329.9672658807],
    [0.0000000002, 1.71833485025, 1089.95260867711],
    [0.0000000002, 0.66958086764, 123758.53467195488],
    [0.00000000019, 0.72592280877, 51535.66517935089],
    [0.00000000022, 3.99083726125, 3462.0008883817],
    [0.00000000021, 2.05460557007, 130290.19632821988],
    [0.00000000023, 3.93119144363, 50167.49256147289],
    [0.0000000002, 6.09924257691, 196137.3172500943],
    [0.00000000023, 2.6976955412, 166740.9482131397],
    [0.00000000026, 6.04075681178, 22747.04689739089],
    [0.00000000022, 0.05797120861, 26126.2799946955],
    [0.00000000022, 5.71570675867, 26735.1577923725],
    [0.00000000019, 4.66884897067, 78683.43788608129],
    [0.0000000002, 2.25947325898, 75930.26921436709],
    [0.00000000024, 2.12831639297, 145204.9985686243],
    [0.00000000019, 3.69323819425, 130446.87307235529],
    [0.00000000024, 3.04675754545, 52177.53457334019],
    [0.00000000025, 4.82366657336, 130443.64086071249],
    [0.0000000002, 2.64704504078, 98690.03669966108],
    [0.00000000019, 3.52306398899, 103498.66000202828],
    [0.00000000025, 2.89149847485, 76888.17944236028],
    [0.00000000022, 0.8364988896, 24952.4700871645],
    [0.00000000022, 4.82712614161, 27223.8238309509],
    [0.00000000018, 3.15171375774, 78413.51643934069],
    [0.0000000002, 0.30552664552, 104819.8213741347],
    [0.00000000022, 3.38793394354, 129379.88996019828],
    [0.00000000019, 6.23315092064, 26248.5543284425],
    [0.00000000019, 5.71365941775, 25927.7395896729],
    [0.00000000019, 1.78991551728, 53029.2464823839],
    [0.00000000018, 4.18932552893, 128221.0024211677],
    [0.0000000002, 5.93600662958, 25908.0698287731],
    [0.0000000002, 6.01080370881, 26268.2240893423],
    [0.00000000019, 4.93432108959, 52817.46366237089],
    [0.00000000018, 1.87899794614, 26411.6523757151],
    [0.00000000022, 4.75027274504, 103932.37173990508],
    [0.00000000018, 4.7426963135, 52195.23222656469],
    [0.00000000024, 3.42780024885, 86144.04239554508],
    [0.0000000002, 0.38316404093, 12412.6167069815],
    [0.00000000025, 3.36113877175, 78313.94986411028],
    [0.0000000002, 5.18325339676, 233731.99016146208],
    [0.0000000002, 0.6056281385, 25234.9505773057],
    [0.00000000017, 2.2921684439, 53868.21577013429],
    [0.00000000017, 4.19571093375, 77307.86586563049],
    [0.00000000017, 0.77039059907, 24602.8562523545],
    [0.00000000017, 4.89323443214, 27573.4376657609],
    [0.00000000023, 1.65926065951, 14.47091148511],
    [0.00000000018, 0.80516343452, 52137.9170649941],
    [0.0000000002, 6.28264844209, 130866.35771623049],
    [0.00000000016, 2.6929300486, 79330.44871939608],
    [0.00000000018, 6.15817325038, 79316.22162539448],
    [0.00000000016, 2.4428581423, 3.6375178745],
    [0.00000000017, 5.9531398619, 121335.36489626988],
    [0.00000000019, 0.0023906486, 132028.83242063827],
    [0.00000000018, 3.07016978555, 102659.69071427788],
    [0.00000000018, 2.48538976177, 99023.89264043048],
    [0.00000000016, 1.30832465047, 50903.3690750047],
    [0.00000000019, 0.09235363676, 94138.08320260228],
    [0.00000000016, 6.10168410633, 28310.00359365469],
    [0.00000000016, 5.36118674347, 25668.17468021549],
    [0.00000000016, 0.06029661634, 24395.9812895553],
    [0.00000000019, 5.79930577989, 78793.15657233368],
    [0.00000000015, 2.51997196564, 155887.76538061467],
    [0.00000000022, 6.08296146382, 1055.6935944096],
    [0.00000000016, 2.88270090422, 65717.47130312308],
    [0.00000000021, 5.1294393329, 3178.38960805111],
    [0.00000000019, 4.86287967507, 106570.12585300008],
    [0.00000000015, 3.64115942517, 50690.06997956669],
    [0.00000000017, 3.32848323709, 55638.2948064971],
    [0.00000000016, 0.9898707834, 104358.4849426803],
    [0.00000000015, 4.2728373534, 6043.9847638919],
    [0.00000000016, 0.28894936273, 176332.4899585115],
    [0.00000000017, 2.00324514114, 62197.88738073129],
    [0.00000000017, 4.71989777168, 86457.74094044768],
    [0.00000000015, 3.42730813171, 52310.1591502169],
    [0.00000000015, 0.50958115781, 235900.75064374466],
    [0.00000000015, 4.72190436199, 61560.8911087071],
    [0.00000000017, 3.12766472647, 103821.67778371868],
    [0.00000000017, 4.57987044915, 153085.08772196327],
    [0.0000000002, 4.57785189845, 3.6883357796],
    [0.00000000014, 5.6858192564, 193938.22990680728],
    [0.00000000015, 2.61658035144, 50007.2896183493],
    [0.00000000015, 0.06488742456, 26831.1370195903],
    [0.00000000014, 0.3820463008, 133882.3344703199],
    [0.00000000017, 3.50167044497, 39629.08052658189],
    [0.00000000016, 1.91399253711, 77.9943614674],
    [0.00000000015, 4.72920790161, 125112.2834169717],
    [0.00000000014, 2.29306969321, 50380.79165691089],
    [0.00000000016, 4.1309179937, 104345.22782488028],
    [0.00000000014, 1.95123243708, 26247.4486938499],
    [0.00000000014, 3.71239259413, 25928.8452242655],
    [0.00000000014, 0.78821341455, 16066.3096789583],
    [0.00000000016, 3.86619726, 50910.4826220055],
    [0.00000000018, 2.12623271525, 92740.81679043909],
    [0.00000000014, 5.78782811767, 1169.83206889211],
    [0.00000000016, 3.71525448527, 53815.1196178199],
    [0.00000000014, 4.45337551699, 78149.51395352086],
    [0.00000000016, 4.39061350798, 203042.13690092487],
    [0.00000000013, 0.37425161178, 639.6534688305],
    [0.00000000015, 6.07909581296, 77616.94240889128],
    [0.00000000014, 4.68939663529, 82815.41910429788],
    [0.00000000014, 4.7477370093, 29415.79498037089],
    [0.00000000014, 5.20331959316, 102755.66994149568],
    [0.00000000014, 1.72247029033, 109.9625037359],
    [0.00000000017, 0.16324703337, 163298.37326817427],
    [0.00000000015, 1.68035003786, 11.2895177474],
    [0.00000000014, 5.16225967454, 173511.6588143853],
    [0.00000000014, 4.39150540314, 52161.82300663029],
    [0.00000000012, 2.27730262051, 102018.17235594128],
    [0.00000000017, 2.64158525193, 52155.8927047651],
    [0.00000000013, 2.88005600662, 102769.89703549728],
    [0.00000000014, 0.84211332161, 78378.3925308913],
    [0.00000000014, 3.21771971652, 26077.1012587938],
    [0.00000000014, 2.44590531469, 26099.1926593216],
    [0.00000000013, 3.84393935941, 79322.84753742829],
    [0.00000000016, 0.56654525193, 51534.63653889291],
    [0.00000000014, 4.45047217505, 20043.9183776823],
    [0.00000000016, 4.85429966913, 50050.17269325269],
    [0.00000000013, 3.70788935281, 44936.88687406489],
    [0.00000000014, 6.05588092072, 24506.18761077469],
    [0.00000000014, 0.68454442549, 35833.4675149143],
    [0.00000000012, 0.96763097373, 52388.86156110289],
    [0.00000000014, 1.93515089311, 198490.18340386607],
    [0.00000000013, 0.54258695046, 103719.07264446709],
    [0.00000000013, 2.24721025792, 24491.96051677309],
    [0.00000000013, 2.99089102997, 52025.99926853029],
    [0.00000000012, 1.26244334627, 25984.3647704771],
    [0.00000000012, 4.40118168494, 26191.9291476383],
    [0.00000000014, 4.74013545104, 53265.7588918255],
    [0.00000000016, 2.6950824866, 25653.94758621389],
    [0.00000000012, 5.94982180077, 181659.96606689427],
    [0.00000000014, 3.98127038415, 53399.86794141051],
    [0.00000000012, 0.13992189685, 53772.23654291649],
    [0.00000000012, 1.72523320675, 43981.7747674233],
    [0.00000000012, 5.92436505942, 28199.79727243529],
    [0.00000000015, 4.44881823724, 1638.82569970449],
    [0.00000000016, 6.01974460542, 34082.6754010819],
    [0.00000000012, 4.59110069577, 51596.3625136331],
    [0.00000000013, 0.25880243151, 52025.00243078899],
    [0.00000000011, 4.6476991643, 52911.92661416369],
    [0.00000000011, 1.89874077048, 70383.86408886709],
    [0.00000000012, 1.02764449556, 112231.45790215228],
    [0.00000000015, 4.79472245666, 103883.89139342589],
    [0.00000000012, 1.34514817706, 52171.68113030689],
    [0.00000000014, 1.43559106475, 26555.6243144451],
    [0.00000000013, 1.61506412907, 286966.6907398325],
    [0.00000000013, 5.01690772702, 208173.77798498247],
    [0.00000000013, 5.62315849993, 79219.06534884768],
    [0.00000000011, 1.70747594337, 52168.44891866409],
    [0.00000000011, 5.83137810614, 26012.87772552339],
    [0.00000000011, 2.17980505276, 48713.8053947667],
    [0.00000000014, 0.87464188435, 27998.85880730789],
    [0.00000000014, 1.00856446032, 52755.7376876307],
    [0.00000000014, 2.05272684647, 52041.9410510469],
    [0.00000000012, 5.20664534748, 131548.65044248087],
    [0.00000000012, 2.40230884933, 130363.49345407888],
    [0.00000000011, 5.14348161985, 104277.07478521299],
    [0.00000000014, 4.30522472177, 27250.62166346549],
    [0.00000000011, 3.57984794643, 51109.06698847489],
    [0.00000000011, 0.50291413498, 115674.03284711768],
    [0.00000000014, 2.57900377541, 49527.10764019189],
    [0.00000000013, 1.255301627, 52027.97137620559],
    [0.00000000011, 3.18085491379, 57503.5262090147],
    [0.00000000013, 3.20863649406, 78470.13879064328],
    [0.00000000014, 1.8551916944, 860.55374623631],
    [0.00000000011, 4.15960190462, 92741.3044254061],
    [0.00000000013, 5.32460666801, 126996.69694542208],
    [0.00000000011, 1.25079104877, 20894.7799002599],
    [0.00000000012, 0.714895525, 51440.17358710009],
    [0.00000000015, 0.61708921425, 24395.49365458829],
    [0.00000000012, 4.22401388053, 52179.98225389499],
    [0.00000000013, 3.4895445522, 65716.98366815608],
    [0.00000000014, 4.39584924296, 3442.3311274819],
    [0.00000000011, 5.05191127458, 736.1203310153],
    [0.0000000001, 2.32271342326, 333.6121232859],
    [0.00000000011, 1.70456192528, 50536.98058344389],
    [0.0000000001, 2.59099487043, 26190.75209830929],
    [0.00000000012, 2.51295739282, 53758.00944891489],
    [0.00000000011, 5.25664726449, 26081.03076519069],
    [0.0000000001, 2.79700804589, 78340.21931348169],
    [0.00000000011, 4.88405989087, 78800.75775430149],
    [0.00000000012, 6.04572661714, 52179.4438010229],
    [0.0000000001, 4.25864792126, 84945.17809560569],
    [0.00000000011, 0.86477927749, 81592.08889848628],
    [0.00000000011, 5.65005720167, 641.16974425549],
    [0.00000000014, 1.5337479461, 183145.2567735975],
    [0.0000000001, 6.17476996345, 25863.8021633558],
    [0.0000000001, 3.55930973128, 53093.98038661369],
    [0.00000000011, 0.09944117691, 51123.29408247649],
    [0.00000000014, 0.87408194721, 25242.0641243065],
    [0.0000000001, 1.40003580429, 154408.89880655028],
    [0.00000000014, 2.93953436186, 54344.81058291449],
    [0.00000000011, 2.53121281826, 78057.76769376888],
    [0.00000000012, 1.32462443773, 26149.87293379789],
    [0.00000000012, 4.33900059348, 26026.4209843175],
    [0.0000000001, 0.70338242506, 637.24008950771],
    [0.0000000001, 2.36288136655, 91919.81373338249],
    [0.00000000014, 3.26945543294, 53125.22570960169],
    [0.00000000011, 2.11182562121, 26094.2878829907],
    [0.00000000012, 1.35040938945, 136100.60393953967],
    [0.0000000001, 4.17716450281, 6751.28465782931],
    [0.0000000001, 0.88468292764, 137209.98249163307],
    [0.0000000001, 3.56286217757, 77940.44782554869],
    [0.0000000001, 2.79243370962, 45404.8518644193],
    [0.00000000013, 5.65469308747, 50270.5853356915],
    [0.00000000011, 5.25078615822, 77520.96318167349],
    [0.00000000011, 5.80424854653, 19958.8499195511],
    [0.0000000001, 6.13036479176, 25619.69433373629],
    [0.00000000011, 5.27912616615, 39763.6772111339],
    [0.0000000001, 1.03100691224, 54086.76194888209],
    [0.00000000009, 2.58296270636, 130593.53833583929],
    [0.00000000009, 1.93570258198, 26514.0557355717],
    [0.00000000009, 3.72792244923, 25662.2381825437],
    [0.0000000001, 0.87681259763, 101703.40155830729],
    [0.00000000013, 4.75978960525, 26161.44408491669],
    [0.00000000013, 0.90383542596, 26014.8498331987],
    [0.0000000001, 2.43967897596, 104991.75367009429],
    [0.0000000001, 1.243422923, 52061.65099371849],
    [0.00000000009, 1.4329581737, 25131.85780308709],
    [0.00000000011, 5.57723740117, 183674.94773869208],
    [0.0000000001, 0.49259119482, 28791.7631137333],
    [0.0000000001, 5.9899889402, 4372.1201842577],
    [0.0000000001, 3.84228475284, 158746.41977111547],
    [0.00000000009, 2.25433851888, 45290.90021070109],
    [0.0000000001, 5.1671693846, 23384.5308043821],
    [0.00000000012, 5.74392096253, 76042.09660760908],
    [0.00000000012, 3.47156983874, 52396.4627430707],
    [0.00000000013, 5.95557437514, 1073.85284167431],
    [0.0000000001, 6.00837282954, 103924.77055793729],
    [0.0000000001, 3.46837882181, 91804.88680973028],
    [0.00000000009, 3.96963705288, 103189.38167937248],
    [0.00000000009, 0.21796861386, 156547.33242782846],
    [0.00000000009, 5.23543221261, 735.6326960483],
    [0.00000000009, 1.95816420727, 45494.33761226529],
    [0.00000000009, 1.00178607588, 114.68310616872],
    [0.00000000009, 2.34791148855, 130285.98071486969],
    [0.00000000013, 3.54674823405, 2168.5166647991],
    [0.0000000001, 1.1976521117, 32132.3755404331],
    [0.00000000009, 3.61118357787, 104984.64012309349],
    [0.00000000011, 3.38074365009, 19367.4329797163],
    [0.0000000001, 2.44976316483, 90989.40667698109],
    [0.00000000009, 3.11869996984, 25550.85481199529],
    [0.00000000009, 0.74322450432, 76255.39570304709],
    [0.00000000009, 4.41624596522, 31281.5140178555],
    [0.00000000012, 5.37072201396, 1699.5230339867],
    [0.00000000011, 3.93547727008, 220.16882495529],
    [0.00000000009, 2.41712554824, 51130.89526444429],
    [0.00000000011, 1.25172069529, 4022.50634944771],
    [0.00000000009, 1.96969875107, 52797.7939014711],
    [0.00000000009, 5.38585404056, 24844.6593573793],
    [0.00000000009, 0.27777099065, 27331.6345607361],
    [0.0000000001, 1.2584437197, 230239.41859459245],
    [0.00000000009, 4.03973091884, 156314.36357149068],
    [0.00000000011, 3.17025202968, 80175.1527254233],
    [0.00000000009, 2.05859040472, 129329.89333829407],
    [0.00000000008, 2.65734511175, 38634.6288981407],
    [0.00000000011, 5.69260296788, 46046.7530611253],
    [0.00000000009, 0.74288994112, 52190.2771946335],
    [0.00000000009, 1.39536424747, 25454.87558477749],
    [0.00000000009, 4.15458502385, 23439.6921335847],
    [0.00000000008, 5.65796860157, 102762.29585352947],
    [0.00000000011, 2.58616852636, 2538.4923217371],
    [0.0000000001, 3.10787144924, 391318.79094109643],
    [0.00000000008, 1.00986052839, 80174.66509045628],
    [0.00000000008, 5.80399155144, 142871.80217575227],
    [0.00000000009, 5.83837700511, 76152.30292882849],
    [0.0000000001, 0.76586105008, 54060.95126404929],
    [0.00000000009, 4.80200590567, 4.1759707466],
    [0.0000000001, 4.30161237035, 35472.50033216589],
    [0.0000000001, 5.71617817105, 125887.31839332868],
    [0.00000000008, 1.10337825429, 27360.8279846849],
    [0.00000000009, 2.54194822126, 1685.2959399851],
    [0.00000000009, 5.51043601697, 58458.63831565629],
    [0.00000000009, 5.2619570491, 25977.45300287129],
    [0.00000000009, 2.40795090884, 1485.0468892197],
    [0.00000000008, 2.74586842231, 2325.1932262991],
    [0.00000000009, 3.83628763541, 22595.5753921881],
    [0.00000000009, 0.899085387, 52172.11794736879],
    [0.00000000008, 5.40598309652, 26934.2297938089],
    [0.00000000008, 2.16624725476, 1575.08961876571],
    [0.00000000008, 0.66150337713, 51876.9237063627],
    [0.0000000001, 3.52742187765, 2751.79141717511],
    [0.00000000008, 2.46382310966, 10681.49435404891],
    [0.00000000011, 4.78783764732, 28096.7044982167],
    [0.00000000008, 0.74099606624, 77956.3956212365],
    [0.00000000008, 2.4621542991, 52400.3948963338],
    [0.00000000008, 4.46259452267, 54824.5049261049],
    [0.0000000001, 3.07618265192, 240452.70414080346],
    [0.00000000008, 0.55741619385, 77741.37582411229],
    [0.00000000009, 2.33738686148, 24491.47288180609],
    [0.00000000008, 0.4251631518, 42791.2090925567],
    [0.00000000008, 4.70625369395, 52490.23628050151],
    [0.00000000008, 3.86744165099, 156520.5491199279],
    [0.00000000007, 6.06395790305, 52206.3769616363],
    [0.00000000008, 2.15830939123, 17098.67925362531],
    [0.00000000007, 4.72162069749, 50291.1489372145],
    [0.0000000001, 4.49723907752, 22065.8844270935],
    [0.00000000008, 2.65028306976, 51112.73601717959],
    [0.00000000009, 2.14235988572, 104454.94915799888],
    [0.0000000001, 3.27688619254, 441.06910236111],
    [0.0000000001, 1.07651496998, 49.7528044207],
    [0.00000000007, 3.67002518147, 7880.3329708225],
    [0.00000000007, 4.65878049481, 52182.67601266569],
    [0.00000000008, 3.31050910615, 52099.29639438929],
    [0.00000000007, 5.29571821879, 122445.23108333028],
    [0.00000000008, 3.30784894855, 66940.80150893469],
    [0.00000000008, 0.11825864367, 187167.51930556167],
    [0.00000000009, 4.39445007595, 156507.9929060289],
    [0.00000000007, 0.7422247667, 51086.3413094383],
    [0.00000000008, 0.44253932824, 430.7741616226],
    [0.00000000008, 5.5361723243, 149288.98707532868],
    [0.00000000008, 5.41205762148, 49956.8053614781],
    [0.00000000007, 0.95302460841, 53132.33925660249],
    [0.00000000008, 2.62377772169, 100908.79380384788],
    [0.00000000007, 3.7044147767, 233681.99353955788],
    [0.00000000007, 2.34002720858, 104248.76360956169],
    [0.00000000008, 5.03600399329, 77314.77763323628],
    [0.00000000008, 0.25407509038, 112231.94553711927],
    [0.00000000007, 1.59729628741, 29396.6128544381],
    [0.00000000007, 4.0663287438, 22779.6810636773],
    [0.00000000009, 3.0036622219, 64741.71416564769],
    [0.00000000007, 5.95614295602, 26290.4003542318],
    [0.00000000007, 5.99066738237, 25885.89356388359],
    [0.00000000009, 3.5830767471, 25863.31452838879],
    [0.00000000007, 3.41090615216, 13655.6166736929],
    [0.00000000007, 3.03792135842, 156740.9617623667],
    [0.00000000008, 4.55619991306, 78571.51086317569],
    [0.00000000007, 3.14378763001, 52663.6848518861],
    [0.00000000007, 1.5677760489, 2118.5200428949],
    [0.00000000008, 4.91321996165, 102872.98980971589],
    [0.0000000001, 3.4034934902, 2703.3723371921],
    [0.00000000007, 0.43580348099, 52074.08758236629],
    [0.00000000007, 2.04943751114, 209659.06869168568],
    [0.00000000007, 3.67671851452, 149846.43781352908],
    [0.00000000007, 4.30875978873, 77417.87040745489],
    [0.00000000009, 1.15423490298, 56260.03860733629],
    [0.00000000007, 3.50070425163, 117892.78995130445],
    [0.00000000009, 2.88385440366, 18073.9487561337],
    [0.00000000007, 4.35051921098, 917.6864684983],
    [0.00000000008, 2.28326188901, 32808.8609383991],
    [0.00000000008, 1.76307802021, 207114.39605479327],
    [0.00000000008, 5.32581127623, 3308.22207789689],
    [0.00000000007, 2.91658615206, 23267.3158149315],
    [0.00000000007, 2.74703887915, 28908.9781031839],
    [0.00000000007, 3.11128439659, 37.88921815429],
    [0.00000000007, 6.13048599151, 19202.50943415989],
    [0.00000000007, 5.70115634056, 52145.72323962749],
    [0.00000000008, 4.37424371597, 103395.56722780968],
    [0.00000000007, 1.57841023127, 208276.8707592011],
    [0.00000000009, 1.8106966493, 2014.73785431429],
    [0.00000000007, 1.08271855123, 63786.6020590061],
    [0.00000000007, 2.83741634124, 24712.3731592119],
    [0.00000000007, 2.64521183634, 127099.14709865468],
    [0.00000000008, 0.10378895366, 120417.92224525509],
    [0.00000000008, 2.96158619363, 103815.05187168489],
    [0.00000000007, 0.99819510291, 8989.22388794889],
    [0.00000000008, 1.62417504708, 579.4437695153],
    [0.00000000007, 2.35955703224, 1135.4330544097],
    [0.00000000006, 5.07797134858, 27574.1270801229],
    [0.00000000007, 5.91237630109, 102976.08258393449],
    [0.00000000006, 3.8330705924, 28774.8690535989],
    [0.00000000006, 1.83055443881, 23401.4248645165],
    [0.00000000006, 1.38927552842, 80463.04058549309],
    [0.00000000008, 1.96535036231, 51258.1198146501],
    [0.00000000006, 3.61870647781, 23704.95394428149],
    [0.00000000006, 2.0449185534, 28471.3399738339],
    [0.00000000006, 1.68248146387, 55618.1374106303],
    [0.00000000007, 1.61837202878, 53311.7269725251],
    [0.00000000007, 5.53141035478, 1802.6158082053],
    [0.00000000008, 4.68334848992, 102018.65999090829],
    [0.00000000007, 5.32851714437, 79995.0755951387],
    [0.00000000007, 5.04612545544, 52278.0126188975],
    [0.00000000008, 4.88698976103, 1162.23088692429],
    [0.00000000006, 6.06855779639, 53439.2074632101],
    [0.00000000007, 1.80548735062, 29580.7185259273],
    [0.00000000007, 3.67914527744, 27388.97377726269],
    [0.00000000007, 1.98447975377, 24787.3201408527],
    [0.00000000006, 3.77150246945, 106470.62024415868],
    [0.00000000007, 2.88869753965, 104127.51158807839],
    [0.00000000007, 0.34091991598, 27624.1237020271],
    [0.00000000007, 5.32270511523, 24552.1702160883],
    [0.00000000008, 3.83070609952, 948.9317914863],
    [0.00000000007, 5.94865065189, 6680.98103591609],
    [0.00000000008, 0.77567524248, 51861.86392076229],
    [0.00000000008, 3.58552572007, 51554.3062997927],
    [0.00000000007, 4.23028089495, 26720.44306340389],
    [0.00000000007, 2.84651949085, 52214.1831362697],
    [0.00000000007, 5.58797516267, 25572.68308796469],
    [0.00000000007, 0.07564986854, 26603.6108301507],
    [0.00000000007, 5.38283352699, 415.7963080956],
    [0.00000000008, 1.1225715898, 54191.0317724297],
    [0.00000000006, 0.30285518092, 24505.69997580769],
    [0.00000000007, 4.29992052709, 2974.85377209451],
    [0.00000000007, 4.30362880096, 48092.0615939275],
    [0.00000000006, 3.84286985256, 78043.54059976728],
    [0.00000000006, 2.33701938638, 19202.99706912689],
    [0.00000000006, 1.70009289223, 53661.3408073351],
    [0.00000000006, 0.21405293391, 104426.63798234759],
    [0.00000000006, 0.26081525757, 27883.4054027787],
    [0.00000000006, 3.09307209285, 156523.7813315707],
    [0.00000000008, 5.86283230643, 51120.60032370579],
    [0.00000000006, 1.52305102135, 226.07308589371],
    [0.00000000008, 0.51879015762, 48997.9043100643],
    [0.00000000006, 4.68111037881, 149756.9520656831],
    [0.00000000007, 1.82650871102, 4083.74468922089],
    [0.00000000008, 3.80478888311, 53259.1303329255],
    [0.00000000006, 5.07036834716, 130006.04778747768],
    [0.00000000007, 1.36856874001, 162810.7385169201],
    [0.00000000006, 2.21234472657, 27441.8957040745],
    [0.00000000006, 3.45128030464, 24734.3982140409],
    [0.00000000007, 4.80045013467, 55503.69812194508],
    [0.00000000008, 3.49135266112, 422.9098550964],
    [0.00000000006, 0.40283917391, 76777.97312114088],
    [0.00000000006, 5.52356103113, 155461.16718973868],
    [0.00000000006, 4.38638116269, 50161.0684288341],
    [0.00000000006, 5.35041562795, 78262.46876949779],
    [0.00000000006, 3.67530335628, 223.1041404771],
    [0.00000000006, 3.76321444127, 78225.82020656829],
    [0.00000000006, 5.36628440371, 76468.69479848508],
    [0.00000000006, 4.67707783228, 78597.8091829755],
    [0.00000000007, 1.16259543363, 30110.4094910219],
    [0.00000000006, 3.49467754329, 35077.61466449009],
    [0.00000000007, 1.41920132868, 1884.65734593389],
    [0.00000000007, 4.54853659672, 1082.8364148101],
    [0.00000000006, 1.96577053321, 5193.12324131429],
    [0.00000000006, 5.17864942773, 171292.9017101985],
    [0.00000000006, 2.86805602516, 25984.56654987209],
    [0.00000000006, 4.20102757189, 29864.5778447925],
    [0.00000000006, 1.46259745932, 22311.7160733229],
    [0.00000000006, 4.38736983699, 76991.27221657889],
    [0.00000000005, 0.68949263605, 27410.8246065891],
    [0.00000000005, 4.97413239516, 24765.4693115263],
    [0.00000000006, 1.69366740663, 51092.9698683383],
    [0.00000000007, 3.84496680361, 88476.75115345008],
    [0.00000000007, 2.78025711521, 34102.3451619817],
    [0.00000000005, 1.26084797472, 2686.4782770577],
    [0.00000000006, 5.55737889155, 31903.2578186947],
    [0.00000000006, 0.10624613966, 20273.0360994207],
    [0.00000000006, 2.86083846875, 104874.43380187408],
    [0.00000000005, 2.16809698297, 155475.3942837403],
    [0.00000000005, 6.14186631974, 128747.59385585209],
    [0.00000000005, 5.0510004491, 26500.51805593209],
    [0.00000000005, 0.61262458211, 25675.7758621833],
    [0.00000000007, 4.13768447366, 25234.46294233869],
    [0.00000000005, 5.69197138572, 53551.8239004777],
    [0.00000000005, 0.34616736613, 60170.5785426561],
    [0.00000000005, 6.05655614068, 27353.71443768409],
    [0.00000000007, 1.1800160843, 52602.16065654089],
    [0.00000000005, 2.35031471718, 128106.07549751546],
    [0.00000000005, 2.02403333135, 629.0954035336],
    [0.00000000005, 1.31146516422, 35191.56631820829],
    [0.00000000006, 2.18238318065, 3492.8153843531],
    [0.00000000007, 4.81830760175, 169093.81436691148],
    [0.00000000006, 4.71794828628, 81591.60126351927],
    [0.00000000006, 4.8497821374, 25462.4767667453],
    [0.00000000006, 0.81384289381, 26713.81715137009],
    [0.00000000007, 2.9726182022, 2641.5850959557],
    [0.00000000005, 3.79651203289, 58220.2786820073],
    [0.00000000005, 2.70097411082, 52813.0463726561],
    [0.00000000006, 1.52077024889, 156531.54400228668],
    [0.00000000005, 1.19912051466, 26236.225683484],
    [0.00000000007, 4.44424756295, 9745.07673837309],
    [0.00000000005, 4.73755202618, 26035.0508067433],
    [0.00000000005, 0.92607300503, 26141.24311137209],
    [0.00000000006, 1.08638725845, 117873.12019040468],
    [0.00000000006, 3.87149168929, 28214.02436643689],
    [0.00000000005, 3.94775717381, 487.39093377069],
    [0.00000000006, 1.27113821429, 53764.63536094869],
    [0.00000000005, 4.36934946235, 104035.46451412368],
    [0.00000000006, 4.83390346226, 437.8877086234],
    [0.00000000005, 3.74810256898, 52098.29955664799],
    [0.00000000006, 1.5344644023, 98068.29289882188],
    [0.00000000005, 2.7413870304, 65538.49980743109],
    [0.00000000005, 2.17866438309, 189854.24140010288],
    [0.00000000005, 1.650562639, 76138.07583482689],
    [0.00000000005, 4.88320109198, 104301.85976187608],
    [0.00000000005, 0.46719543123, 1243.73141916191],
    [0.00000000005, 1.20837858717, 118829.20756698029],
    [0.00000000006, 2.74486813288, 13675.2864345927],
    [0.00000000005, 2.13216570647, 153084.60008699627],
    [0.00000000006, 1.50606009977, 13.9832765181],
    [0.00000000005, 0.04883294046, 78697.66498008289],
    [0.00000000005, 3.63277479562, 26610.23674218449],
    [0.00000000005, 5.00629124334, 1052.02456570489],
    [0.00000000005, 3.70422350101, 149.3193796511],
    [0.00000000006, 6.13258483711, 122444.74344836328],
    [0.00000000006, 5.32441467055, 24822.5794804313],
    [0.00000000005, 0.80608286136, 26162.44092265799],
    [0.00000000005, 6.05508383397, 154.0226279683],
    [0.00000000005, 0.11277607968, 104401.85300568449],
    [0.00000000005, 0.32519606443, 53654.91667469629],
    [0.00000000005, 5.10038810847, 118828.71993201328],
    [0.00000000005, 6.11943807574, 191.2044486281],
    [0.00000000005, 5.771247716, 124777.93984123527],
    [0.00000000005, 6.14333001423, 51006.46184922329],
    [0.00000000006, 4.56143654817, 104241.65006256089],
    [0.00000000005, 0.65495415751, 104668.24825343689],
    [0.00000000004, 6.26437463075, 76532.8308892735],
    [0.00000000006, 0.69389985894, 75615.01078176608],
    [0.00000000004, 2.34685033934, 24608.79275002629],
    [0.00000000004, 2.34685033934, 24609.2803849933],
    [0.00000000005, 5.16993727796, 23389.6955116805],
    [0.00000000005, 0.49368775325, 28786.5984064349],
    [0.00000000004, 1.13517998278, 31775.7773280097],
    [0.00000000004, 4.52844504843, 20400.5165901057],
    [0.00000000005, 4.70021525766, 107679.50440509345],
    [0.00000000004, 6.12765105459, 13541.6650199747],
    [0.00000000005, 5.57977129989, 29428.27175079049],
    [0.00000000005, 5.3076317311, 26.0545023163],
    [0.00000000004, 3.86073160191, 25764.64154240029],
    [0.00000000005, 6.0962093376, 78265.43771491438],
    [0.00000000006, 2.35286352659, 51688.4153493777],
    [0.00000000006, 6.24688491106, 23865.80268949369],
    [0.00000000004, 2.73813240429, 35211.72371407509],
    [0.00000000004, 2.92549262692, 16964.57020404031],
    [0.00000000004, 5.93215370895, 47804.1737338577],
    [0.00000000004, 3.83250941463, 77623.56832092509],
    [0.00000000005, 0.50234970795, 86458.22857541469],
    [0.00000000004, 1.08485860111, 27040.2235823173],
    [0.00000000004, 4.5787664301, 25136.0703357981],
    [0.00000000005, 4.59959229753, 25778.86863640189],
    [0.00000000005, 1.06403273368, 26397.42528171349],
    [0.00000000005, 4.02283478855, 78374.15956342549],
    [0.00000000004, 3.47793310153, 48834.95003896509],
    [0.00000000005, 5.01835542656, 25771.26745443409],
    [0.00000000004, 1.67917095725, 33480.6013611425],
    [0.00000000004, 3.98445407396, 18695.6925569729],
    [0.00000000005, 0.59989929417, 703.8770021009],
    [0.00000000004, 5.10698405361, 156378.09946979408],
    [0.00000000005, 0.28534518128, 155467.7931017725],
    [0.00000000005, 1.29884621572, 26404.05119374729],
    [0.00000000004, 0.18983170026, 9123.33293753389],
    [0.00000000005, 2.32620215234, 2015.9149036433],
    [0.00000000004, 0.61980953649, 76998.38576357969],
    [0.00000000004, 0.1306510947, 129586.56314360249],
    [0.00000000004, 2.99427045342, 1368.9040703285],
    [0.00000000004, 1.4914988262, 45425.0092602861],
    [0.00000000004, 5.39873919994, 28928.6478640837],
    [0.00000000004, 0.26488583127, 23247.6460540317],
    [0.00000000004, 5.36778217078, 23866.2903244607],
    [0.00000000004, 2.35188051852, 20453.1132297053],
    [0.00000000004, 3.31174451269, 31723.1806884101],
    [0.00000000004, 2.30331784549, 26239.19462890059],
    [0.00000000004, 1.97810159548, 199599.56195595945],
    [0.00000000004, 2.77836300783, 52356.1272309165],
    [0.00000000004, 1.24931397565, 26137.65594599489],
    [0.00000000004, 3.46342382133, 51539.0538286077],
    [0.00000000004, 3.69944590805, 32279.1699733045],
    [0.00000000004, 1.96417912316, 19897.1239448109],
    [0.00000000004, 1.7018802699, 78905.36680394509],
    [0.00000000004, 3.00071021966, 52336.4574700167],
    [0.00000000004, 5.68676014339, 50912.8927380537],
    [0.00000000005, 0.53917560687, 26085.17801364109],
    [0.00000000005, 5.12444942434, 26091.1159044743],
    [0.00000000004, 6.12827810146, 25441.13612574289],
    [0.00000000004, 3.34711834324, 25923.71104846829],
    [0.00000000004, 2.31650668797, 26252.58286964711],
    [0.00000000004, 0.93197083282, 24925.18461968289],
    [0.00000000005, 0.8422307079, 13706.1009305641],
    [0.00000000005, 4.82139432331, 38470.19298755129],
    [0.00000000005, 4.69896171289, 18227.7275666185],
    [0.00000000005, 0.96466331832, 33948.5663514969],
    [0.00000000005, 6.00043896187, 10.8018827804],
    [0.00000000004, 2.80981383368, 147423.26803784407],
    [0.00000000004, 3.37539797378, 120225.98634417648],
    [0.00000000004, 2.65298230712, 95.7354097343],
    [0.00000000004, 4.35824496747, 74935.81758592589],
    [0.00000000004, 0.27953957902, 142871.31454078527],
    [0.00000000004, 0.37589110708, 26131.0300339611],
    [0.00000000004, 5.28773392413, 26045.2638841543],
    [0.00000000004, 3.24717162624, 1066.2516597065],
    [0.00000000004, 0.73794406026, 25035.39094090229],
    [0.00000000005, 4.22425932829, 1577.0997249643],
    [0.00000000004, 0.56307156026, 1262.91354509469],
    [0.00000000005, 6.00635216618, 51102.44107644109],
    [0.00000000004, 1.12630290328, 106262.56823203048],
    [0.00000000004, 1.48479477953, 104771.34102765548],
    [0.00000000005, 1.39791854337, 179172.99086353747],
    [0.00000000004, 3.88144405304, 52329.34127614969],
    [0.00000000005, 1.62731568621, 151200.1865585459],
    [0.00000000004, 3.34025458568, 18319.7804023631],
    [0.00000000004, 2.32337044553, 33856.5135157523],
    [0.00000000005, 3.807447021, 51315.74017187909],
    [0.00000000004, 3.26438690958, 159970.2376118941],
    [0.00000000005, 5.02554220823, 107692.46881048009],
    [0.00000000004, 3.12725019808, 24182.19455915029],
    [0.00000000004, 3.79384310544, 25021.16384690069],
    [0.00000000005, 3.05069290377, 49637.8015963783],
    [0.00000000004, 3.6257802417, 64901.01590043989],
    [0.00000000005, 0.63333030208, 77930.09730143669],
    [0.00000000004, 3.70617022011, 106685.05277665229],
    [0.00000000004, 2.8732100738, 25249.1776713073],
    [0.00000000004, 2.79041495741, 26927.11624680809],
    [0.00000000005, 1.54666149626, 130020.27488147929],
    [0.00000000004, 1.73976987963, 42430.7295447753],
    [0.00000000004, 3.38176805408, 189386.27640974845],
    [0.00000000004, 3.25018015096, 130907.72451570889],
    [0.00000000004, 2.06353106693, 76352.7537589889],
    [0.00000000004, 5.31959837801, 78050.16651180109],
    [0.00000000004, 2.2422412858, 26507.14396796589],
    [0.00000000004, 3.53906955839, 21715.78295731649],
    [0.00000000004, 3.82039111865, 50690.7593939287],
    [0.00000000003, 5.68926517353, 76095.19275992349],
    [0.00000000004, 0.40278258619, 27047.2698190153],
    [0.00000000004, 5.26084244502, 25129.0240991001],
    [0.00000000003, 4.44502926835, 25980.8416521281],
    [0.00000000003, 1.21859576286, 26195.4522659873],
    [0.00000000004, 4.63561794007, 52165.00440036799],
    [0.00000000004, 2.69531678715, 104881.05971390787],
    [0.00000000004, 4.60182936648, 8044.7688814119],
    [0.00000000005, 0.15112505254, 45455.3361212905],
    [0.00000000004, 5.01042912978, 25565.08190599689],
    [0.00000000004, 2.55785749371, 215942.1445416771],
    [0.00000000004, 5.41986884632, 25992.1677318399],
    [0.00000000004, 0.24375618489, 26184.1261862755],
    [0.00000000003, 0.06938261642, 129909.58092529287],
    [0.00000000004, 4.35391878884, 48153.7875686677],
    [0.00000000005, 1.35637771566, 10059.7505532097],
    [0.00000000004, 0.44819649652, 16496.6052136859],
    [0.00000000004, 5.21542853469, 35679.6887044295],
    [0.00000000004, 1.03867130112, 103395.76900720468],
    [0.00000000004, 3.88762025023, 51040.3732287387],
    [0.00000000003, 5.63440461335, 125111.79578200469],
    [0.00000000004, 2.46419290723, 128843.57308306987],
    [0.00000000004, 2.48121871677, 52015.64273124709],
    [0.00000000004, 5.17960970329, 621.9876183227],
    [0.00000000003, 1.35017943249, 23113.5370044467],
    [0.00000000003, 4.31344559872, 29062.7569136687],
    [0.00000000003, 0.13992300676, 25794.7361746805],
    [0.00000000003, 5.52370202445, 26381.5577434349],
    [0.00000000003, 1.65047629311, 78283.13536813887],
    [0.00000000004, 6.01757036855, 26037.66270218649],
    [0.00000000004, 0.78738841944, 23543.4743221653],
    [0.00000000004, 4.87623661177, 28632.8195959501],
    [0.00000000003, 2.34677335126, 26279.5952251693],
    [0.00000000003, 3.31685167995, 25896.6986929461],
    [0.00000000004, 4.17686572959, 25998.6612112117],
    [0.00000000004, 1.48675930162, 26177.63270690369],
    [0.00000000003, 1.45345885107, 24079.10178493169],
    [0.00000000003, 2.83722079462, 49851.10069181629],
    [0.00000000004, 0.04334468913, 14235.79189565871],
    [0.00000000004, 5.62028034208, 37940.50202245669],
    [0.00000000003, 3.19680435173, 41494.79956406649],
    [0.00000000004, 3.72413363777, 261988.6537853188],
    [0.00000000003, 3.23280579449, 61560.40347374009],
    [0.00000000004, 6.14807840422, 32217.4439985643],
    [0.00000000003, 5.81361645381, 78243.79584633929],
    [0.00000000004, 2.7035659286, 51995.9729703473],
    [0.00000000003, 0.89067609209, 154308.9055627419],
    [0.00000000003, 0.19486754591, 78398.0622917911],
    [0.00000000003, 3.22218438408, 202420.39310008567],
    [0.00000000003, 4.85336780642, 79117.14962395809],
    [0.00000000004, 4.8126695648, 28420.8557169627],
    [0.00000000003, 4.64236443125, 313054.5938814067],
    [0.00000000003, 1.82348628585, 26114.4452788575],
    [0.00000000003, 3.84013874536, 26061.8486392579],
    [0.00000000003, 6.1661155376, 116783.41139921108],
    [0.00000000003, 6.22418249204, 2169.0042997661],
    [0.00000000003, 3.34714723948, 32131.88790546609],
    [0.00000000003, 2.95057028322, 68241.62832713968],
    [0.00000000004, 2.12743436214, 49424.5025009403],
    [0.00000000003, 3.11077916313, 27993.6117239981],
    [0.00000000004, 3.05439250241, 156954.26085780468],
    [0.00000000004, 3.67142845852, 52021.78365518009],
    [0.00000000004, 5.73212182199, 192828.8513547139],
    [0.00000000003, 0.27361838208, 25345.1568985251],
    [0.00000000003, 1.81581655351, 87648.7942502813],
    [0.00000000003, 0.68500664823, 105410.75067900248],
    [0.00000000003, 3.93077791188, 130446.38808425449],
    [0.00000000003, 6.05546250987, 45290.41257573408],
    [0.00000000003, 1.95812396188, 251775.36823910786],
    [0.00000000004, 1.27498750708, 50952.23225985329],
    [0.00000000003, 1.4367034299, 23421.09462541629],
    [0.00000000003, 4.22692160131, 28755.19929269911],
    [0.00000000003, 3.98270762104, 163297.88563320728],
    [0.00000000003, 3.47547087612, 26727.55661040469],
    [0.00000000004, 3.43694245255, 24711.88552424489],
    [0.00000000003, 3.68091678909, 111590.04434041328],
    [0.00000000004, 0.2913140304, 50476.77088412869],
    [0.00000000003, 4.21457884017, 52072.2679120513],
    [0.00000000003, 3.61792324623, 77622.5396804671],
    [0.00000000003, 0.47995189315, 52016.7483658397],
    [0.00000000003, 1.68763185836, 25970.8270908375],
    [0.00000000003, 3.97599317285, 26205.4668272779],
    [0.00000000004, 5.27937253398, 27511.7116910207],
    [0.00000000004, 0.38425249723, 24664.5822270947],
    [0.00000000003, 2.30032754148, 33918.23949049249],
    [0.00000000003, 3.36329748973, 18258.0544276229],
    [0.00000000004, 4.83285053411, 112545.64408202188],
    [0.00000000004, 3.76448219227, 61921.3706564885],
    [0.00000000003, 6.06735340898, 51741.85072778809],
    [0.00000000003, 2.88367503068, 222225.22039166847],
    [0.00000000003, 1.15891911019, 78249.72614820449],
    [0.00000000004, 3.05981714265, 158116.7355622125],
    [0.00000000003, 3.68443191743, 73891.58924046489],
    [0.00000000003, 1.88338582885, 26387.2733533269],
    [0.00000000003, 6.09657221455, 12725.6972522585],
    [0.00000000003, 5.04796024742, 26984.2264157131],
    [0.00000000003, 0.61566478379, 25192.0675024023],
    [0.00000000003, 3.48855867987, 103498.17236706128],
    [0.00000000003, 0.74835060715, 79487.77108298469],
    [0.00000000003, 1.44150895108, 50579.37602338029],
    [0.00000000003, 3.44346861237, 143980.69309287865],
    [0.00000000003, 5.63232630472, 91805.37444469729],
    [0.00000000003, 3.11959949863, 50490.99797813029],
    [0.00000000003, 2.99543245253, 54879.6662553075],
    [0.00000000003, 4.69667538764, 55484.5159960123],
    [0.00000000003, 4.64572031653, 2332.9525753885],
    [0.00000000003, 1.39528143088, 1383.13116433011],
    [0.00000000003, 1.78559566583, 128106.56313248246],
    [0.00000000003, 0.70542302818, 1471.9968445471],
    [0.00000000003, 4.72601280222, 146505.82538682927],
    [0.00000000004, 4.23386749461, 102232.60488843489],
    [0.00000000003, 5.04493378788, 24510.8034166099],
    [0.00000000003, 0.61869124333, 27665.4905015055],
    [0.00000000004, 4.60583023308, 26365.1819527991],
    [0.00000000004, 1.05779479813, 25811.11196531629],
    [0.00000000003, 0.02744721053, 106263.05586699749],
    [0.00000000003, 3.49736618564, 50601.2042993497],
    [0.00000000003, 0.30011567778, 179967.11098302988],
    [0.00000000003, 1.53690934138, 210921.73841929683],
    [0.00000000003, 1.31624723631, 26202.5460659711],
    [0.00000000003, 2.75823464337, 2821.07496160971],
    [0.00000000003, 6.26421306637, 5020.16230489671],
    [0.00000000003, 4.80001740407, 229463.89598326845],
    [0.00000000003, 6.02378503125, 71378.31571730827],
    [0.00000000003, 1.42673173544, 29001.0309389285],
    [0.00000000003, 4.23689329577, 23175.26297918689],
    [0.00000000003, 0.68304283752, 15406.40878752529],
    [0.00000000003, 4.32693015716, 25940.06823463139],
    [0.00000000003, 2.38990502393, 220026.13304838145],
    [0.00000000003, 0.59649942463, 963.6465204549],
    [0.00000000003, 2.87116210123, 113455.76337789789],
    [0.00000000003, 1.35908128792, 49201.4401460209],
    [0.00000000003, 5.82324458614, 143165.2129601295],
    [0.00000000003, 2.38673232157, 51735.22481575429],
    [0.00000000003, 2.84532132702, 25914.69838767311],
    [0.00000000003, 2.81830370419, 26261.59553044229],
    [0.00000000003, 5.22041687007, 51745.51975649279],
    [0.00000000002, 3.03566163825, 25554.52384069999],
    [0.00000000002, 2.62796339296, 26621.77007741539],
    [0.00000000003, 5.20753478644, 25530.6962208573],
    [0.00000000003, 0.45609024477, 26645.5976972581],
    [0.00000000002, 3.73081171564, 99979.49238203908],
    [0.00000000003, 5.03565808597, 25626.81052760331],
    [0.00000000003, 0.62796694524, 26549.48339051209],
    [0.00000000003, 5.59916996136, 23976.4966456801],
    [0.00000000003, 5.34361577728, 20956.5058750001],
    [0.00000000003, 0.32000925393, 31219.7880431153],
    [0.00000000002, 0.7421130025, 242985.64742485987],
    [0.00000000002, 4.68727528203, 133767.40754666767],
    [0.00000000003, 4.44342016483, 283524.6034298342],
    [0.00000000002, 1.15603737137, 127790.81706491447],
    [0.00000000002, 4.29763002496, 127791.30469988148],
    [0.00000000002, 5.43119958754, 71378.80335227528],
    [0.00000000002, 4.5893182736, 21202.3375212295],
    [0.00000000002, 1.07430675761, 30973.9563968859],
    [0.00000000003, 3.47073853524, 2353.1099712553],
    [0.00000000003, 2.48443590939, 76358.48847726568],
    [0.00000000003, 0.03897228819, 24292.40088036969],
    [0.00000000003, 2.04739291424, 157636.55358405507],
    [0.00000000003, 0.83289676584, 25361.6649391875],
    [0.00000000003, 4.83072826537, 26814.6289789279],
    [0.00000000002, 1.24497717708, 57369.41715942969],
    [0.00000000003, 5.4152553038, 52187.0958008958],
    [0.00000000003, 4.02922617142, 49953.70583106789],
    [0.00000000002, 1.46800292953, 110396.0849651557],
    [0.00000000002, 2.56755430966, 273311.3178836232],
    [0.00000000002, 0.95339846585, 7994.2846245407],
    [0.00000000002, 2.63620968801, 31127.7352073707],
    [0.00000000002, 3.0274153432, 21048.5587107447],
    [0.00000000002, 0.1683730546, 27133.30179524529],
    [0.00000000002, 3.81308180912, 289185.9354789864],
    [0.00000000002, 0.71138534841, 5634.7899118689],
    [0.00000000002, 1.76112647723, 108903.32224587208],
    [0.00000000003, 6.06940283285, 128857.80017707148],
    [0.00000000002, 4.81801153794, 5687.3865514685],
    [0.00000000003, 4.73128149211, 21650.63275068411],
    [0.00000000003, 0.9323435391, 30525.66116743129],
    [0.00000000003, 0.496987695, 117.5636857037],
    [0.00000000002, 2.18169836096, 29266.2927496253],
    [0.00000000002, 5.80090003502, 24176.45984087349],
    [0.00000000002, 3.25477992512, 102129.99974918329],
    [0.00000000003, 4.34402660372, 53338.52480503969],
    [0.00000000003, 6.2737960164, 67608.51339047348],
    [0.00000000002, 3.21341452307, 267649.985834471],
    [0.00000000002, 1.92153809084, 544.1618765797],
    [0.00000000002, 0.63318713248, 54862.7721951731],
    [0.00000000002, 4.71897270316, 162188.5070811139],
    [0.00000000002, 5.95465982913, 123554.12200045666],
    [0.00000000003, 3.65120791864, 47803.68609889069],
    [0.00000000002, 3.82189241243, 112546.1317169889],
    [0.00000000002, 0.77739174044, 71024.79001563908],
    [0.00000000003, 3.39676430082, 24971.65485996349],
    [0.00000000003, 2.26686073039, 27204.6390581519],
    [0.00000000002, 5.01817813007, 26165.89750304159],
    [0.00000000003, 4.38762823834, 14477.5950006835],
    [0.00000000002, 6.05328448229, 97466.21885888245],
    [0.00000000002, 5.24033215662, 8482.40701076191],
    [0.00000000003, 3.13012289596, 206584.7050896987],
    [0.00000000003, 0.28818731494, 25881.47377565349],
    [0.00000000002, 0.63582632095, 105306.96849042189],
    [0.00000000003, 6.00821622727, 7768.12273921109],
    [0.00000000002, 0.75081825828, 263097.54470244516],
    [0.00000000002, 0.75081825828, 263098.03233741224],
    [0.00000000002, 0.39253998165, 90988.91904201408],
    [0.00000000003, 3.0160486145, 5814.86704215349],
    [0.00000000003, 0.86557994215, 49976.9627573449],
    [0.00000000003, 2.68824003168, 27161.7559832485],
    [0.00000000002, 6.12457483767, 27151.46104250999],
    [0.00000000003, 1.61229350276, 29051.0275608327],
    [0.00000000003, 4.05133152845, 23125.2663572827],
    [0.00000000002, 3.41958084674, 32973.29684898851],
    [0.00000000003, 0.44711181004, 134.35286706851],
    [0.00000000002, 0.64120353129, 78484.36588464488],
    [0.00000000002, 0.13220595262, 50373.67810991009],
    [0.00000000003, 2.58526525309, 246114.03618995566],
    [0.00000000002, 5.24756751342, 19336.61848374489],
    [0.00000000002, 2.97251385048, 25014.53793486689],
    [0.00000000002, 0.4604292432, 156534.7762139295],
    [0.00000000003, 4.30654322236, 78115.87451777978],
    [0.00000000002, 0.28012264229, 51760.49761001979],
    [0.00000000002, 1.24434330997, 25867.24668165189],
    [0.00000000002, 3.40478353479, 26089.14379679899],
    [0.00000000002, 5.12603604161, 30486.3216456317],
    [0.00000000002, 0.5375889896, 21689.9722724837],
    [0.00000000003, 3.31169456914, 78112.90557236319],
    [0.00000000002, 4.36305168844, 1898.5950354231],
    [0.00000000002, 5.21464317983, 235746.97183325986],
    [0.00000000002, 4.7195637381, 26151.8828573611],
    [0.00000000002, 0.9440612931, 26024.4110607543],
    [0.00000000002, 5.77039379556, 50049.68505828569],
    [0.00000000003, 4.30724193035, 42116.5433649057],
    [0.00000000002, 0.39973619044, 61165.51780606429],
    [0.00000000002, 1.17288571933, 249268.72327485125],
    [0.00000000002, 4.26445898022, 184526.76529172008],
    [0.00000000003, 6.06473923651, 26226.6644559284],
    [0.00000000003, 5.88207110188, 25949.629462187],
    [0.00000000002, 4.41949123763, 223180.33249831005],
    [0.00000000002, 4.41949123763, 223180.82013327704],
    [0.00000000003, 2.07289744094, 65851.58035270809],
    [0.00000000002, 3.33696976419, 4525.8989947425],
    [0.00000000003, 1.90326122005, 26376.0348191275],
    [0.00000000003, 3.76036381116, 25800.2590989879],
    [0.00000000002, 1.19438265065, 26049.52628845289],
    [0.00000000002, 5.14117998003, 4398.41850405751],
    [0.00000000003, 3.79796015832, 23581.5019948011],
    [0.00000000003, 1.86566487289, 28594.7919233143],
    [0.00000000002, 3.55520237633, 1593.2488660304],
    [0.00000000002, 3.13962245506, 78267.34694259708],
    [0.00000000002, 0.92505130149, 54508.7588585369],
    [0.00000000002, 4.31177771871, 78476.76470267709],
    [0.00000000002, 0.41611414366, 1280.0383901115],
    [0.00000000002, 1.10174173283, 35077.12702952309],
    [0.00000000003, 1.43403842688, 26124.79552198719],
    [0.00000000003, 4.22958660433, 26051.4983961282],
    [0.00000000002, 1.72941826067, 158745.93213614845],
    [0.00000000002, 5.48576882408, 52367.49836674349],
    [0.00000000002, 6.2050203258, 41520.61024889929],
    [0.00000000002, 4.14056597313, 51950.2208322217],
    [0.00000000002, 2.55940503302, 28133.4554918599],
    [0.00000000002, 3.10421999819, 24042.8384262555],
    [0.00000000003, 2.17160326158, 51753.38406301899],
    [0.00000000003, 6.15199422925, 25633.23759253039],
    [0.00000000003, 5.79481610914, 26543.05632558499],
    [0.00000000002, 3.97512757833, 24999.54380245671],
    [0.00000000002, 1.68849745288, 27176.75011565869],
    [0.00000000002, 0.30844272162, 309.0345051723],
    [0.00000000002, 2.4043836772, 1155.6049748905],
    [0.00000000002, 0.3420060373, 236702.57157486846],
    [0.00000000002, 3.00390396144, 76887.69180739328],
    [0.00000000002, 0.98682277986, 4084.2323241879],
    [0.00000000002, 1.59074157843, 24601.67920302549],
    [0.00000000002, 2.80906034932, 27818.78167702329],
    [0.00000000002, 2.26687572256, 2198.8435258035],
    [0.00000000002, 4.53134788435, 24292.8885153367],
    [0.00000000002, 1.5858017873, 22759.5236678105],
    [0.00000000002, 2.9120234714, 27143.5967359838],
    [0.00000000002, 1.70541081745, 25973.22003540546],
    [0.00000000002, 0.14177660173, 10021.5934626159],
    [0.00000000002, 1.5191722367, 20618.2631760171],
    [0.00000000002, 4.14445279451, 31558.0307420983],
    [0.00000000002, 2.33949764052, 2854.8841913937],
    [0.00000000002, 1.98831285254, 51953.18977763829],
    [0.00000000002, 0.41604857841, 51951.21766996299],
    [0.00000000002, 1.57183044674, 52249.34722649089],
    [0.00000000002, 1.70818461045, 138633.54722359608],
    [0.00000000002, 5.13575806013, 225687.46509753366],
    [0.00000000002, 1.56258965853, 138319.36104372647],
    [0.00000000002, 2.18966503711, 32768.88417749029],
    [0.00000000002, 0.33098015159, 24079.5894198987],
    [0.00000000002, 4.71436622522, 52202.3484204317],
    [0.00000000002, 4.96992436419, 28206.42318446909],
    [0.00000000002, 4.96216423435, 180496.80194812448],
    [0.00000000002, 4.73660629226, 78259.58427188109],
    [0.00000000002, 2.28401532959, 26624.46383618609],
    [0.00000000002, 0.07960474111, 23549.8984548041],
    [0.00000000002, 0.37327493336, 26293.84487252789],
    [0.00000000002, 5.83913193896, 4601.70630147949],
    [0.00000000002, 6.23015270329, 21716.2705922835],
    [0.00000000002, 3.66936461651, 330.8627811417],
    [0.00000000002, 1.5157946592, 51219.27330969429],
    [0.00000000002, 5.05016618926, 78256.35206023828],
    [0.00000000002, 3.58281342347, 50063.91215228729],
    [0.00000000002, 1.42199745004, 132658.02899457427],
    [0.00000000002, 3.28152370063, 96.2230447013],
    [0.00000000002, 4.38858567715, 1265.32366114289],
    [0.00000000002, 2.49109566786, 52823.0609339467],
    [0.00000000002, 1.26800894276, 78270.57915423988],
    [0.00000000002, 5.4107168384, 7392.21058460129],
    [0.00000000002, 1.10270458425, 61165.03017109729],
    [0.00000000002, 2.14950038663, 2544.4288194089],
    [0.00000000002, 1.97162097641, 26421.5152648601],
    [0.00000000002, 1.33257889355, 2655.8121899573],
    [0.00000000002, 0.79025165001, 24705.9490265731],
    [0.00000000002, 4.8733733812, 27470.3448915423],
    [0.00000000002, 6.14740336072, 1353.5049275333],
    [0.00000000002, 0.11906484226, 1603.5438067689],
    [0.00000000002, 3.46701006002, 40738.45907867528],
    [0.00000000002, 5.71504799272, 30460.0233258319],
    [0.00000000002, 1.16042497962, 4578.4956343421],
    [0.00000000002, 0.14527391572, 78113.90241010448],
    [0.00000000002, 4.19897532608, 32839.1877994035],
    [0.00000000002, 0.13374340654, 14297.5178703989],
    [0.00000000002, 5.52988162467, 37878.7760477165],
    [0.00000000002, 6.20542886765, 104501.41958091488],
    [0.00000000002, 2.61097814223, 25138.48371512089],
    [0.00000000002, 1.06395351693, 44131.52503670349],
    [0.00000000002, 4.10426443523, 104358.48229581409],
    [0.00000000002, 5.39518200455, 23336.5993593661],
    [0.00000000002, 5.39518200455, 23336.11172439909],
    [0.00000000002, 6.04499536111, 224.1009782184],
    [0.00000000002, 3.63958668308, 51547.19851458179],
    [0.00000000002, 3.16690823789, 202.0095776906],
    [0.00000000002, 3.16690823789, 202.4972126576],
    [0.00000000002, 6.25775046727, 31108.06544647091],
    [0.00000000002, 5.68905987112, 21068.2284716445],
    [0.00000000002, 2.96587029379, 117076.82218358829],
    [0.00000000002, 6.10746294738, 117077.30981855528],
    [0.00000000002, 5.3829111355, 24814.97829846349],
    [0.00000000002, 1.98570847468, 27299.4880294167],
    [0.00000000002, 3.67791655653, 24876.8058886987],
    [0.00000000002, 2.83769263825, 26086.17485138239],
    [0.00000000002, 5.74298703182, 105418.35186097029],
    [0.00000000002, 2.69099617398, 49534.7088221597],
    [0.00000000002, 4.25460776712, 107679.99204006046],
    [0.00000000002, 1.43038533012, 19337.1061187119],
    [0.00000000002, 1.80708255079, 24957.9930114719],
    [0.00000000002, 3.85654248042, 27218.3009066435],
    [0.00000000002, 3.46898572008, 66826.36222024946],
    [0.00000000002, 3.11677200697, 27257.7352104663],
    [0.00000000002, 1.54813681705, 26197.86564531009],
    [0.00000000002, 2.26084282341, 151199.6989235789],
    [0.00000000002, 2.41505887981, 426.1525939975],
    [0.00000000002, 2.05501019547, 76784.59903317469],
    [0.00000000002, 5.17891248404, 179172.50322857045],
    [0.00000000002, 3.03839569379, 168959.21768235945],
    [0.00000000002, 3.03839569378, 168959.70531732647],
    [0.00000000002, 6.05144227865, 7829.84871395129],
    [0.00000000002, 2.93845777192, 151975.22153490287],
    [0.00000000002, 5.56610117919, 20235.36664379391],
    [0.00000000002, 0.09752385202, 31940.9272743215],
    [0.00000000002, 0.34264055281, 1585.38455950421],
    [0.00000000002, 3.25664376155, 76.0222537921],
    [0.00000000002, 4.50673995632, 1581.7155307995],
    [0.00000000002, 4.26102899883, 52643.5274560193],
    [0.00000000002, 0.89847733804, 130433.13096645445],
    [0.00000000002, 5.35295047368, 79956.11891170849],
    [0.00000000002, 1.38123247936, 190809.35350674443],
    [0.00000000002, 5.22748899717, 155417.79647986827],
    [0.00000000002, 2.25472465461, 58219.79104704029],
    [0.00000000002, 5.67352931908, 299399.2210251974],
    [0.00000000002, 0.82971507937, 51738.40620949199],
    [0.00000000002, 2.97072309926, 2045.5523502857],
    [0.00000000002, 4.40886857181, 27953.3783615753],
    [0.00000000002, 1.2547564594, 24222.9155565401],
    [0.00000000002, 4.61765528518, 164721.45036517028],
    [0.00000000002, 0.02963994293, 28441.0131128295],
    [0.00000000002, 5.63398508828, 23735.2808052859],
    [0.00000000002, 4.94052786966, 26948.4568878105],
    [0.00000000002, 0.72309716155, 25227.83703030489],
    [0.00000000002, 2.26852923431, 148532.64658993747],
    [0.00000000002, 2.26852923431, 148533.13422490444],
    [0.00000000002, 1.51852948979, 77307.17645126847],
    [0.00000000002, 6.1058815794, 191.6920835951],
    [0.00000000002, 0.34186830904, 23976.00901071309],
    [0.00000000002, 4.08150026692, 206370.27255720508],
    [0.00000000002, 5.05627960945, 4268.3379956771],
    [0.00000000002, 1.84151604889, 23962.2695516785],
    [0.00000000002, 1.84151604889, 23961.78191671149],
    [0.00000000002, 4.35044814692, 3776.6747032183],
    [0.00000000002, 2.20524904392, 24918.55870764909],
    [0.00000000002, 3.21408526505, 102769.40940053028],
    [0.00000000002, 2.12858110666, 25889.0749576213],
    [0.00000000002, 3.53504392455, 26287.21896049409],
    [0.00000000002, 1.66367572246, 2648.2110079895],
    [0.00000000002, 5.71672028658, 80432.71372448868],
    [0.00000000002, 2.91629438354, 13989.9602494293],
    [0.00000000002, 2.74733064767, 38186.3336686861],
    [0.00000000002, 3.61656667123, 8194.5191506921],
    [0.00000000002, 4.13822438475, 237009.641560871],
    [0.00000000002, 2.25489644524, 24863.84148331209],
    [0.00000000002, 0.79435355035, 76064.86589891909],
    [0.00000000002, 6.11153635623, 71492.75500599349],
    [0.00000000002, 1.47457311729, 30831.5487222281],
    [0.00000000002, 4.18905191391, 21344.7451958873],
    [0.00000000002, 2.64103330733, 124663.98818751707],
    [0.00000000001, 4.41626377495, 101702.91392334028],
    [0.00000000002, 2.9255361492, 105404.12476696869],
    [0.00000000002, 1.90962776233, 307.31380348609],
    [0.00000000002, 1.20163121188, 184834.32291268965],
    [0.00000000002, 4.34322386547, 184833.8352777226],
    [0.00000000001, 5.20673509792, 124156.19604039608],
    [0.00000000001, 3.29097711242, 22909.51353352309],
    [0.00000000001, 3.29097711242, 22910.0011684901],
    [0.00000000001, 4.2262710132, 958.87904247409],
    [0.00000000002, 0.74624553136, 77196.97013004909],
    [0.00000000002, 2.61684173604, 9591.29792788829],
    [0.00000000002, 1.03105335724, 189385.78877478145],
    [0.00000000001, 0.57809610749, 24919.2481220111],
    [0.00000000001, 5.08552892372, 27257.0457961043],
    [0.00000000002, 3.46440981619, 25440.64849077589],
    [0.00000000001, 0.45556161499, 26010.3964150738],
    [0.00000000002, 0.42518108376, 43693.8869073535],
    [0.00000000002, 3.473152643, 25014.05029989989],
    [0.00000000001, 5.34981963981, 9385.0848255587],
    [0.00000000002, 4.60292662632, 26202.09861277591],
    [0.00000000001, 4.92214692877, 52499.55551728929],
    [0.00000000002, 3.4615513196, 14650.55593710108],
    [0.00000000002, 5.08759156576, 78690.06379811508],
    [0.00000000001, 0.08764164508, 5039.34443082949],
    [0.00000000002, 4.10611692906, 2214.98690507971],
    [0.00000000001, 3.50305053765, 77211.19722405069],
    [0.00000000001, 5.68985540916, 233202.29919636747],
    [0.00000000002, 5.49174220323, 21516.52370109911],
    [0.00000000002, 0.17188282798, 30659.77021701629],
    [0.00000000002, 5.30439852095, 621.49998335569],
    [0.00000000002, 1.13720629039, 25764.15390743329],
    [0.00000000001, 5.32131294248, 26.5421372833],
    [0.00000000001, 2.30545913825, 226796.35601466],
    [0.00000000001, 5.44705179184, 226796.84364962706],
    [0.00000000002, 0.33446329498, 28839.69455874929],
    [0.00000000002, 5.50347633955, 102225.97897640108],
    [0.00000000002, 1.56059892812, 129971.79453500008],
    [0.00000000002, 4.06465171282, 27139.92770727909],
    [0.00000000001, 2.62468643294, 50807.38984778689],
    [0.00000000001, 6.16306543539, 78187.19953596349],
    [0.00000000002, 5.06371993416, 51472.41691601449],
];

const X1: &[Term] = &[
    [0.00328639517, 6.04028758995, 0.2438174835],
    [0.00106107047, 5.91538469937, 52176.0501006319],
    [0.0003244844, 2.68404164136, 78263.95324220609],
    [0.00009699418, 5.42935843059, 26087.65932409069],
    [0.0000880849, 5.73515025839, 104351.8563837803],
    [0.00004833058, 0.21935428474, 26088.1469590577],
    [0.00002334329, 2.50289115433, 130439.75952535449],
    [0.0000089025, 2.61758665086, 52175.56246566489],
    [0.00000615643, 5.55374456387, 156527.6626669287],
    [0.00000147225, 6.09730240676, 78263.46560723908],
    [0.0000016246, 2.32137690587, 182615.56580850287],
    [0.00000069502, 2.91939587909, 24978.7684069643],
    [0.00000063529, 2.74219954754, 27197.5255111511],
    [0.00000042967, 5.37217235288, 208703.46895007708],
    [0.00000032514, 3.18436046111, 104351.36874881329],
    [0.00000017597, 5.97213886087, 51066.6715485385],
    [0.00000013287, 5.79146748296, 53285.4286527253],
    [0.00000011758, 0.18693736842, 1109.1347346099],
    [0.00000012502, 1.40596439354, 1059.6257476727],
    [0.00000011468, 0.35008608561, 20426.8149099055],
    [0.00000011394, 2.13977164486, 234791.37209165128],
    [0.00000008221, 5.31229385932, 31749.4790082099],
    [0.00000008067, 0.15951495713, 130439.27189038748],
    [0.00000006176, 5.46098436501, 4552.1973145423],
    [0.00000004784, 0.26415468148, 21536.1934619989],
    [0.00000004858, 2.7407766499, 77154.57469011268],
    [0.00000004269, 3.39637722107, 46514.7180514797],
    [0.00000004412, 5.10134190424, 25132.5472174491],
    [0.00000003922, 2.3797897237, 1589.3167127673],
    [0.00000004017, 4.41672907758, 27147.5288892469],
    [0.00000003763, 4.17909693196, 14765.48286075331],
    [0.00000004285, 4.27106878562, 51116.6681704427],
    [0.00000003901, 0.54893072973, 27043.7467006663],
    [0.00000003221, 1.09802577229, 26617.8379241523],
    [0.0000000308, 4.68247133566, 25558.4559939631],
    [0.0000000303, 5.19056049817, 260879.27523322543],
    [0.00000002907, 0.23044150312, 26068.47719815791],
    [0.00000002906, 5.43307929185, 26107.81671995749],
    [0.00000002383, 2.07830748691, 26084.2656236997],
    [0.00000002381, 3.58525530417, 26092.0282944157],
    [0.00000002069, 1.48127323869, 37410.8110573621],
    [0.00000002028, 5.44501246598, 30640.1004561165],
    [0.00000002088, 3.34536117513, 156527.17503196167],
    [0.00000001998, 2.50305248201, 79373.33179429949],
    [0.0000000188, 0.22580120983, 47624.0966035731],
    [0.0000000158, 1.69158612681, 9104.1508116011],
    [0.00000001575, 4.31668154619, 955.3559241251],
    [0.00000001508, 0.43559873501, 19317.43635781211],
    [0.00000001397, 0.16380111329, 72602.62119305388],
    [0.00000001363, 3.28693470602, 50586.97720534809],
    [0.00000001495, 3.77822350663, 12566.3955174663],
    [0.00000001401, 2.04862276452, 426.8420083595],
    [0.00000001215, 3.93785769383, 52705.7410657265],
    [0.0000000131, 2.48605199154, 26095.2605060585],
    [0.00000001272, 3.22244702438, 26081.03341205689],
    [0.00000001476, 2.99369021823, 23869.3898548709],
    [0.00000001169, 5.49111664316, 3442.81876244891],
    [0.00000001103, 1.21903918539, 53235.43203082109],
    [0.00000001375, 5.79233621902, 103242.47783168689],
    [0.00000001244, 1.82501834169, 51220.4503590233],
    [0.00000001238, 2.66650381891, 28306.90406324449],
    [0.00000000967, 3.57175258487, 53131.6498422405],
    [0.00000000986, 5.22314307595, 32858.8575603033],
    [0.00000000911, 4.29268130103, 529.44714761109],
    [0.00000000859, 0.94524893916, 40853.3860023275],
    [0.00000000855, 5.33250267421, 27677.2198543415],
    [0.00000000844, 1.03648635199, 25874.8478636197],
    [0.00000001042, 0.1904074229, 22645.57201409229],
    [0.00000000924, 0.74224500219, 640.1411037975],
    [0.0000000081, 4.64191507416, 26301.4460544957],
    [0.00000000807, 1.95815243056, 286967.1783747996],
    [0.00000000875, 2.13143145763, 83925.28529135829],
    [0.00000000874, 5.55044306137, 529.9347825781],
    [0.00000000821, 4.77032702914, 36301.4325052687],
    [0.00000000823, 5.19902587368, 11322.42028082089],
    [0.00000000738, 2.19981448222, 56728.0035976907],
    [0.00000000724, 1.50055745214, 18849.4713674577],
    [0.00000000714, 2.67898291505, 6770.46678376209],
    [0.00000000667, 3.97361924647, 43072.1431065143],
    [0.00000000665, 3.28272656551, 52156.38033973211],
    [0.00000000893, 0.42706797774, 27197.03787618409],
    [0.00000000752, 1.88765944457, 39609.8984006491],
    [0.00000000673, 4.81316066279, 1052.51220067191],
    [0.00000000688, 0.86035048942, 15874.8614128467],
    [0.00000000618, 2.12715472204, 5661.5758666357],
    [0.00000000808, 4.33645956081, 1066.7392946735],
    [0.00000000616, 0.70456047849, 51646.3591355373],
    [0.0000000065, 1.39099602371, 25028.7650288685],
    [0.0000000055, 0.20488240066, 182615.07817353585],
    [0.00000000554, 3.01484203719, 2119.00767786191],
    [0.00000000535, 0.35919946298, 52179.9314359899],
    [0.00000000657, 5.49249173952, 29530.7219040231],
    [0.00000000527, 4.93321108764, 26514.7451499337],
    [0.00000000502, 0.52469020589, 38654.2986590405],
    [0.00000000568, 0.32194599748, 24978.28077199729],
    [0.00000000498, 4.51537827269, 63498.71419893629],
    [0.00000000469, 5.15675930919, 110013.18843293248],
    [0.00000000521, 2.19480576214, 52195.71986153169],
    [0.0000000044, 3.21479581797, 98690.52433462809],
    [0.0000000058, 6.26369012947, 7.3573644843],
    [0.00000000438, 4.12030207268, 33326.8225506577],
    [0.0000000053, 0.13282096675, 2218.51328670329],
    [0.00000000483, 3.6474329893, 51749.45190975589],
    [0.00000000434, 5.12850749811, 52172.1687652739],
    [0.00000000408, 1.65432828623, 7238.4317741165],
    [0.0000000039, 0.61831253528, 78793.64420730069],
    [0.00000000374, 2.01855068333, 58946.76070187749],
    [0.00000000404, 6.01175659056, 52168.93655363109],
    [0.00000000356, 1.51807956509, 62389.33564684289],
    [0.00000000373, 0.98588361546, 103292.47445359109],
    [0.00000000326, 4.29903268783, 79323.33517239528],
    [0.00000000393, 2.56051977629, 129330.38097326108],
    [0.00000000385, 5.51554890357, 52183.1636476327],
    [0.00000000316, 6.11147866851, 76674.88034692229],
    [0.0000000039, 5.74481892138, 54394.80720481869],
    [0.00000000323, 6.048983825, 49957.2929964451],
    [0.00000000299, 1.43100773503, 16983.75232997309],
    [0.00000000328, 4.04864136289, 68050.66769599509],
    [0.00000000314, 4.92007418019, 51536.15281431789],
    [0.00000000367, 4.85256595117, 77308.35350059748],
    [0.00000000316, 3.4920361689, 45405.3394993863],
    [0.00000000319, 4.23988546277, 13656.10430865991],
    [0.00000000266, 0.22278100987, 48733.47515566649],
    [0.00000000289, 6.05400760825, 6.86972951729],
    [0.00000000261, 4.0018428759, 16984.2399649401],
    [0.00000000261, 1.49214547675, 52389.3491960699],
    [0.00000000233, 0.84231286084, 51123.7817174435],
    [0.00000000231, 5.24319932827, 82815.90673926489],
    [0.00000000239, 2.80376783399, 213.5429129215],
    [0.00000000222, 3.99420764167, 66941.2891439017],
    [0.00000000216, 5.00937403559, 313055.08151637384],
    [0.00000000276, 1.32498030782, 51109.55462344189],
    [0.00000000222, 3.3684869826, 32371.2228090491],
    [0.00000000198, 2.05297081511, 53765.1229959157],
    [0.00000000197, 0.74093273246, 69160.04624808849],
    [0.00000000196, 2.65111539002, 50057.2862402535],
    [0.00000000202, 4.02603981938, 129380.37759516528],
    [0.00000000201, 4.4676035498, 44937.3745090319],
    [0.00000000216, 2.15128003627, 213.0552779545],
    [0.00000000185, 1.91579542249, 136101.0915745067],
    [0.00000000183, 2.26311522221, 419.72846135871],
    [0.00000000186, 1.00434945598, 57837.3821497841],
    [0.00000000178, 5.27169711768, 105461.23493587368],
    [0.00000000177, 3.75548067168, 51962.7510051939],
    [0.0000000017, 0.05181048718, 78244.2834813063],
    [0.00000000229, 1.74351509136, 433.9555553603],
    [0.00000000173, 0.79032586326, 94138.57083756929],
    [0.00000000157, 3.59089906997, 64742.2018006147],
    [0.00000000153, 0.87597586259, 59414.7256922319],
    [0.00000000159, 6.16899315901, 853.4401992355],
    [0.00000000155, 4.68975805923, 35192.0539531753],
    [0.00000000149, 0.33674359016, 24499.0740637739],
    [0.00000000152, 6.14951984841, 4551.7096795753],
    [0.00000000147, 1.70740828389, 52602.6482915079],
    [0.00000000147, 2.15567882351, 19805.0711090663],
    [0.00000000182, 2.25669630329, 55618.6250455973],
    [0.0000000014, 0.10429379711, 23754.95056618569],
    [0.00000000146, 3.32146505695, 208702.98131511008],
    [0.00000000154, 3.39064691795, 99799.90288672148],
    [0.00000000139, 6.20098571989, 25973.70767037247],
    [0.00000000138, 5.74451336242, 26202.58624774291],
    [0.00000000191, 3.87484611458, 26728.0442453717],
    [0.00000000152, 5.74228778845, 1109.6223695769],
    [0.00000000162, 1.42094114156, 38520.1896094555],
    [0.00000000141, 1.24257990116, 77734.26227711148],
    [0.00000000135, 3.41542832234, 78267.83457756409],
    [0.00000000128, 4.56986923193, 88477.23878841709],
    [0.00000000147, 5.33327922722, 31748.99137324289],
    [0.00000000135, 6.26697445915, 124778.42747620228],
    [0.00000000148, 1.14618449835, 27154.6424362477],
    [0.00000000134, 5.16840701859, 12431.79883291429],
    [0.00000000121, 3.61695346173, 104881.54734887488],
    [0.00000000116, 4.76247090725, 25934.3681485729],
    [0.00000000116, 2.64947988255, 32858.36992533629],
    [0.00000000115, 0.89972324521, 26241.9257695425],
    [0.00000000148, 1.0209916826, 25661.5487681817],
    [0.0000000011, 5.99966246087, 28206.9108194361],
    [0.00000000108, 1.68778367228, 27140.41534224609],
    [0.00000000115, 4.01860742052, 103822.16541868569],
    [0.00000000109, 3.92589684326, 53284.94101775829],
    [0.00000000107, 5.56945579461, 28421.3433519297],
    [0.00000000143, 4.93475595866, 1596.43025976811],
    [0.00000000112, 5.6094783373, 155418.2841148353],
    [0.00000000113, 2.46236993488, 5327.7199258663],
    [0.00000000101, 3.5155563745, 25620.1819687033],
    [0.00000000122, 3.03742531641, 10213.5293636945],
    [0.00000000102, 5.56482383222, 2333.44021035551],
    [0.00000000097, 2.14556254447, 26556.11194941211],
    [0.00000000118, 1.76061169391, 7994.77225950771],
    [0.00000000109, 1.60651799859, 103396.25664217169],
    [0.00000000109, 6.11285140847, 79219.55298381469],
    [0.00000000095, 0.10552520847, 58459.1259506233],
    [0.00000000095, 2.74369425701, 78256.83969520529],
    [0.00000000097, 1.08624310756, 105411.23831396949],
    [0.00000000092, 2.26275916512, 10213.0417287275],
    [0.00000000094, 4.41890699093, 1582.2031657665],
    [0.00000000103, 4.94789948755, 91785.70468379749],
    [0.00000000101, 3.48509343222, 20426.32727493849],
    [0.00000000089, 3.24400432046, 74821.37829724069],
    [0.00000000089, 0.10163739667, 125887.80602829569],
    [0.00000000103, 3.50686067995, 51066.18391357149],
    [0.00000000087, 4.36360162781, 27043.2590656993],
    [0.00000000083, 2.62141457558, 73711.99974514729],
    [0.00000000083, 1.77797295395, 77624.05595589208],
    [0.00000000097, 5.36704254243, 71980.8773922147],
    [0.00000000081, 0.79181721859, 155468.28073673949],
    [0.0000000008, 4.00356912047, 22645.08437912529],
    [0.00000000081, 2.81631624727, 76045.1961380193],
    [0.00000000081, 5.04291780878, 26138.1435809619],
    [0.0000000008, 0.61687993534, 26038.1503371535],
    [0.00000000104, 2.28163680118, 78271.06678920689],
    [0.00000000103, 5.23374561959, 78283.62300310588],
    [0.00000000083, 2.50636376987, 80482.71034639288],
    [0.00000000089, 1.8933713957, 78260.07190684808],
    [0.00000000073, 4.21987024947, 26617.35028918529],
    [0.00000000077, 0.51899049759, 18208.05780571871],
    [0.00000000082, 3.91217027287, 77211.68485901768],
    [0.00000000077, 2.8891731873, 41962.7645544209],
    [0.00000000082, 4.38267763386, 77197.45776501608],
    [0.00000000067, 5.02424385988, 85034.66384345168],
    [0.0000000007, 1.09572627877, 537.0483295789],
    [0.00000000067, 0.33161014347, 5661.0882316687],
    [0.00000000067, 3.82822220045, 120226.47397914348],
    [0.00000000065, 4.95852563263, 162188.99471608087],
    [0.00000000075, 4.93326519789, 149.8070146181],
    [0.00000000071, 2.0085409482, 108903.8098808391],
    [0.00000000063, 3.29036116867, 51756.5654567567],
    [0.00000000062, 2.43463735809, 102762.78348849648],
    [0.00000000067, 4.50074668009, 64608.09275102969],
    [0.00000000064, 5.16392570404, 13521.9952590749],
    [0.00000000062, 0.12968651638, 28306.41642827749],
    [0.00000000058, 1.62746286468, 11322.9079157879],
    [0.00000000058, 0.2796637023, 24498.58642880689],
    [0.00000000077, 3.79522760165, 25565.5695409639],
    [0.00000000076, 4.60149373597, 78477.2523376441],
    [0.00000000063, 0.77089662682, 93029.19228547589],
    [0.00000000078, 0.2611758968, 71493.2426409605],
    [0.00000000077, 3.91821281814, 51742.33836275509],
    [0.00000000057, 3.59228773257, 2648.6986429565],
    [0.00000000058, 1.77431779111, 339142.984657948],
    [0.00000000056, 5.53301773648, 76145.18938182769],
    [0.00000000059, 5.94806683967, 21535.70582703189],
    [0.00000000056, 1.70277932228, 117873.60782537168],
    [0.00000000053, 4.64718015139, 25557.96835899609],
    [0.0000000006, 1.21018656116, 71025.27765060609],
    [0.00000000052, 0.56762366419, 10022.0810975829],
    [0.00000000055, 5.77897482747, 51322.85371887989],
    [0.00000000058, 1.40115688303, 43071.65547154729],
    [0.00000000053, 5.07195556849, 79853.02613748988],
    [0.00000000053, 0.21642667454, 78050.6541467681],
    [0.00000000053, 2.16306876234, 98068.78053378889],
    [0.00000000057, 1.24363255483, 633.0275567967],
    [0.00000000049, 0.37407469111, 90830.10494218889],
    [0.00000000067, 1.84374645383, 26610.72437715149],
    [0.0000000005, 6.00585950729, 131549.1380774479],
    [0.00000000049, 5.14290001765, 33968.23611239669],
    [0.0000000005, 5.30537322308, 81706.5281871715],
    [0.00000000051, 0.73226920314, 129910.06856025988],
    [0.00000000057, 3.56358445708, 26624.9514711531],
    [0.00000000045, 3.36854845214, 51116.18053547569],
    [0.00000000045, 3.10088248442, 104332.1866228805],
    [0.00000000051, 0.854225916, 647.25465079831],
    [0.00000000043, 4.78281150158, 78690.55143308209],
    [0.00000000054, 2.25324121444, 522.8212355773],
    [0.00000000042, 1.33828179439, 114565.14192999128],
    [0.00000000041, 5.1340646527, 38519.70197448849],
    [0.00000000041, 3.95146540461, 25028.27739390149],
    [0.00000000052, 1.00660903298, 39744.0074502341],
    [0.00000000043, 0.4941332617, 103925.25819290428],
    [0.00000000045, 4.58276908488, 76.50988875911],
    [0.00000000042, 3.21789877684, 46848.5739922491],
    [0.00000000047, 3.90827664098, 44181.52165860769],
    [0.00000000038, 3.08592038431, 22760.01130277751],
    [0.00000000037, 3.12927309026, 151975.7091698699],
    [0.0000000005, 2.23521826581, 25551.34244696229],
    [0.0000000005, 0.72721768819, 50579.86365834729],
    [0.00000000045, 2.61026174635, 7879.84533585549],
    [0.00000000043, 4.81034248928, 26521.8586969345],
    [0.00000000037, 2.72331919328, 30639.61282114949],
    [0.00000000037, 3.88891756517, 48732.98752069949],
    [0.00000000035, 3.18195761886, 84547.0290921975],
    [0.0000000004, 0.70421187083, 52815.9473869459],
    [0.00000000041, 4.14956775757, 1059.1381127057],
    [0.00000000041, 3.03500918971, 150866.3306177765],
    [0.0000000004, 5.01484347149, 26294.33250749489],
    [0.00000000041, 0.58688251264, 25881.9614106205],
    [0.00000000034, 0.93821904321, 26191.23973327629],
    [0.00000000034, 4.73103289822, 25985.0541848391],
    [0.00000000034, 0.83186142058, 89586.6173405105],
    [0.00000000041, 4.17323142245, 52329.8289111167],
    [0.00000000035, 2.52595229567, 157637.04121902207],
    [0.00000000042, 6.0226113403, 26507.63160293289],
    [0.00000000039, 0.14372316696, 234790.88445668426],
    [0.00000000037, 1.88707685753, 57836.89451481709],
    [0.00000000036, 0.34370159925, 130969.45049044909],
    [0.00000000032, 2.37775558754, 181506.18725640947],
    [0.00000000033, 1.24575523402, 50594.09075234889],
    [0.00000000044, 6.11332634879, 6681.46867088311],
    [0.00000000036, 0.18721130545, 104355.73771913828],
    [0.00000000032, 4.64549491762, 129484.15978374588],
    [0.0000000003, 5.207245009, 52644.0150909863],
    [0.00000000031, 2.56009147472, 29416.28261533789],
    [0.00000000031, 1.30643526573, 105307.45612538888],
    [0.0000000003, 3.71640911346, 95247.94938966268],
    [0.00000000031, 2.51344352354, 52290.48938931711],
    [0.00000000029, 3.83470620242, 181556.1838783137],
    [0.00000000039, 1.79502663396, 25448.2496727437],
    [0.00000000032, 4.74231453232, 51639.24558853649],
    [0.00000000029, 4.21913805837, 53242.5455778219],
    [0.00000000029, 5.39418594332, 25668.6623151825],
    [0.00000000028, 6.18231601923, 77204.5713120169],
    [0.00000000036, 2.35417973488, 25132.0595824821],
    [0.00000000027, 2.33120714494, 54509.2464935039],
    [0.00000000026, 2.96005545403, 52061.61081194667],
    [0.00000000025, 0.44641100649, 29428.7593857575],
    [0.00000000031, 1.36909644374, 18093.13088206649],
    [0.0000000003, 2.9931812842, 26941.3433408097],
    [0.00000000025, 0.01970755306, 956.53297345411],
    [0.00000000027, 3.92481990123, 18093.6185170335],
    [0.00000000028, 5.33056586298, 104358.96993078108],
    [0.00000000026, 1.68523834841, 26237.7101561923],
    [0.00000000024, 5.34360042933, 22747.5345323579],
    [0.00000000024, 0.60759776379, 46514.23041651269],
    [0.00000000029, 4.14852842199, 131499.1414555437],
    [0.00000000024, 5.11295227085, 42154.2128205325],
    [0.00000000024, 2.72205818316, 54294.81396101029],
    [0.00000000023, 0.59370019139, 146314.3771207177],
    [0.00000000024, 3.26900809848, 26107.32908499049],
    [0.00000000026, 4.45438431206, 25021.6514818677],
    [0.00000000023, 0.68577711601, 20760.1832157079],
    [0.00000000023, 0.40104725527, 77154.08705514569],
    [0.00000000024, 4.07999331304, 26067.9895631909],
    [0.00000000023, 3.75077334681, 25035.8785758693],
    [0.00000000023, 4.73851847693, 143961.51096694588],
    [0.00000000026, 1.72805748634, 27684.3334013423],
    [0.00000000022, 3.46952873618, 19804.5834740993],
    [0.00000000025, 6.21468652611, 26080.54577708989],
    [0.00000000023, 3.49763456236, 130013.16133447849],
    [0.00000000022, 0.73153517786, 79372.84415933248],
    [0.00000000025, 0.72123980539, 52026.4869034973],
    [0.00000000021, 5.79201875326, 104344.74283677948],
    [0.00000000021, 5.87156389227, 102133.09927959349],
    [0.00000000023, 1.39284020284, 61279.9570947495],
    [0.00000000021, 2.36405581509, 85502.6288338061],
    [0.00000000023, 0.1071315506, 77844.46859833089],
    [0.00000000022, 1.72894324326, 188276.8978576551],
    [0.00000000021, 5.21984877761, 124156.68367536309],
    [0.00000000027, 0.68325003204, 103299.58800059189],
    [0.0000000002, 5.77389955341, 23968.89546371229],
    [0.00000000023, 0.69010991788, 77830.24150432929],
    [0.00000000021, 1.14745744394, 103285.36090659029],
    [0.0000000002, 2.07158691051, 49527.59527515889],
    [0.0000000002, 2.29184774399, 1479.11039154791],
    [0.0000000002, 5.92355125832, 23969.3830986793],
    [0.0000000002, 4.95913484029, 103711.95909746629],
    [0.00000000019, 3.6519081333, 52126.05347872769],
    [0.00000000019, 0.04924351217, 3327.89183879669],
    [0.00000000022, 1.42243873408, 104565.15547921829],
    [0.00000000026, 1.25974103229, 13362.6935242827],
    [0.00000000025, 0.01235262119, 24864.32911827909],
    [0.00000000023, 4.22016173229, 15874.37377787969],
    [0.00000000022, 4.72905553277, 6283.3196674749],
    [0.00000000025, 5.64927135524, 27311.96479983631],
    [0.00000000019, 4.78388065302, 53228.31848382029],
    [0.00000000021, 3.31277231518, 97581.14578253469],
    [0.00000000018, 5.56704384876, 106570.61348796709],
    [0.00000000021, 1.92247469083, 60056.13925397089],
    [0.00000000019, 6.17553462363, 26083.7779887327],
    [0.00000000021, 1.98793084523, 104371.52614468009],
    [0.00000000017, 2.4726923088, 1162.7185218913],
    [0.0000000002, 4.30765634281, 41962.27691945389],
    [0.0000000002, 1.17324939187, 26091.5406594487],
    [0.00000000017, 2.58918808487, 77410.75686045409],
    [0.00000000018, 1.56564486854, 115674.52048208468],
    [0.00000000021, 5.05205604193, 134991.71302241329],
    [0.00000000017, 3.10172524257, 104138.55728834229],
    [0.00000000017, 5.66948357862, 37410.32342239509],
    [0.00000000019, 5.5346499752, 522.3336006103],
    [0.00000000019, 4.9183377561, 52698.62751872569],
    [0.00000000019, 3.92340038849, 131395.3592669631],
    [0.00000000016, 4.33041124879, 12546.72575656651],
    [0.00000000016, 6.22611768107, 100909.28143881488],
    [0.00000000016, 0.8260685843, 25867.73431661889],
    [0.0000000002, 5.89802475411, 26094.77287109149],
    [0.00000000018, 5.08722928383, 47623.60896860609],
    [0.00000000018, 1.45687313804, 12432.2864678813],
    [0.0000000002, 6.13261748755, 11610.7957758577],
    [0.00000000015, 5.51634191387, 183724.9443605963],
    [0.00000000017, 4.79626245128, 51529.03926731709],
    [0.0000000002, 1.77003688612, 426.3543733925],
    [0.00000000016, 4.9099327142, 26308.5596014965],
    [0.00000000016, 4.79764512586, 128850.68663007069],
    [0.00000000019, 4.56495311793, 51543.2663613187],
    [0.00000000019, 3.74798808655, 155997.9717018341],
    [0.00000000015, 1.34224435786, 26164.4130303333],
    [0.00000000018, 3.66440627266, 25874.36022865269],
    [0.00000000014, 2.04202638738, 36300.94487030169],
    [0.00000000019, 5.88442577075, 45494.82524723229],
    [0.00000000014, 3.57916105055, 44295.9609472929],
    [0.00000000018, 3.82094554949, 119117.0954270501],
    [0.00000000016, 3.7627247479, 76667.76679992149],
    [0.00000000014, 2.07119234799, 107794.43132874569],
    [0.00000000014, 2.36814985653, 16065.82204399129],
    [0.00000000014, 1.33222225896, 44181.03402364069],
    [0.00000000014, 4.76386004796, 2111.8941308611],
    [0.00000000015, 1.74258697688, 52226.0467225361],
    [0.00000000014, 4.76443919805, 27999.3464422749],
    [0.00000000019, 4.94519146654, 104347.97504842229],
    [0.00000000014, 3.43033111839, 116918.00808376308],
    [0.00000000015, 4.82510142643, 365230.88779952226],
    [0.00000000016, 0.25720185897, 52712.85461272729],
    [0.00000000017, 4.24342377575, 97113.18079218028],
    [0.00000000013, 0.92750711335, 24176.9474758405],
    [0.00000000017, 3.1010809838, 20760.6708506749],
    [0.00000000014, 0.49576253379, 25954.0379094727],
    [0.00000000014, 5.16786249742, 26222.2560086427],
    [0.00000000017, 0.70506585057, 70269.42480018188],
    [0.00000000013, 6.17002721316, 178063.6123114441],
    [0.00000000015, 1.07987898155, 52099.7840293563],
    [0.00000000013, 3.68965474753, 323.74923414091],
    [0.00000000013, 1.62156829158, 39609.41076568209],
    [0.00000000013, 0.38134163255, 206.42936592071],
    [0.00000000014, 1.8213441206, 105940.92927906409],
    [0.00000000013, 2.20656460343, 102233.09252340188],
    [0.00000000014, 0.61259865461, 77204.08367704989],
    [0.00000000014, 0.58031216793, 13521.50762410789],
    [0.00000000013, 4.69319019775, 111590.53197538029],
    [0.00000000012, 4.27702379029, 76681.99389392308],
    [0.00000000015, 1.28652822525, 27670.10630734069],
    [0.00000000013, 2.50362342037, 58946.27306691049],
    [0.00000000015, 2.00793708614, 26300.95841952869],
    [0.00000000013, 3.31492062191, 14477.1073657165],
    [0.00000000013, 1.0702737683, 1692.40948698591],
    [0.00000000013, 4.39268185141, 140653.0450715655],
    [0.00000000012, 1.34267704514, 52072.9573264133],
    [0.00000000012, 6.26475550018, 54394.31956985169],
    [0.00000000012, 1.17105305254, 7238.9194090835],
    [0.00000000012, 5.40922931059, 25447.76203777669],
    [0.00000000012, 6.20873329955, 72936.4771338233],
    [0.00000000015, 5.4931550934, 2126.1212248627],
    [0.00000000012, 5.66744055627, 55504.18575691209],
    [0.00000000012, 3.61008361501, 220.6564599223],
    [0.00000000012, 1.76003505598, 111122.56698502589],
    [0.00000000012, 1.22583703139, 90695.99589260388],
    [0.00000000012, 1.56652249391, 104778.45457465628],
    [0.00000000012, 5.12697804116, 64607.60511606269],
    [0.00000000012, 6.24535629479, 110634.93223377169],
    [0.00000000011, 3.57080417047, 36109.9842391571],
    [0.00000000013, 0.24854762034, 49842.85370775989],
    [0.00000000014, 1.03533656892, 78417.73205269089],
    [0.00000000011, 2.67619239702, 26198.3532802771],
    [0.00000000011, 2.98743263419, 25977.94063783829],
    [0.00000000012, 5.20745322961, 31415.6230674405],
    [0.00000000012, 5.36057333309, 6770.9544187291],
    [0.00000000011, 4.12038634021, 51969.8645521947],
    [0.0000000001, 0.53057090724, 23868.9022199039],
    [0.00000000012, 6.15491126193, 130420.0897644547],
    [0.00000000014, 2.66131661996, 32769.3718124573],
    [0.00000000013, 2.57684550665, 33967.74847742969],
    [0.00000000011, 0.63840837632, 51645.87150057029],
    [0.0000000001, 0.30214091711, 28736.6017845307],
    [0.0000000001, 1.03579590518, 52705.25343075949],
    [0.00000000014, 5.20517620734, 77837.35505133009],
    [0.0000000001, 4.48203927159, 141762.4236236589],
    [0.00000000012, 0.89324430712, 224.5886131854],
    [0.0000000001, 1.5155371587, 170049.41410852008],
    [0.00000000013, 4.39783434076, 38813.6003938327],
    [0.0000000001, 1.45494488062, 27147.04125427989],
    [0.0000000001, 3.80634126779, 78903.8505285201],
    [0.00000000013, 4.94493446189, 6282.83203250789],
    [0.0000000001, 0.60091290149, 207644.08701988787],
    [0.00000000012, 0.27544235334, 26395.7045800273],
    [0.00000000012, 5.38818267787, 25780.58933808811],
    [0.0000000001, 0.84101636752, 12565.9078824993],
    [0.00000000012, 4.1814817961, 26725.1432310819],
    [0.00000000012, 1.48214323511, 25451.1506870335],
    [0.00000000009, 5.62764518642, 51219.76094466129],
    [0.00000000009, 1.40970085491, 155572.0629253201],
    [0.00000000009, 1.98340877635, 78731.91823256049],
    [0.00000000009, 1.03302022359, 14764.9952257863],
    [0.00000000011, 3.25069263252, 65697.80154222329],
    [0.00000000012, 2.28213947586, 25446.73339731871],
    [0.00000000012, 3.38148555535, 26729.56052079669],
    [0.00000000012, 1.48681981161, 12725.20961729149],
    [0.0000000001, 4.04518614257, 65831.9105918083],
    [0.00000000009, 1.98008802, 16703.3059509825],
    [0.00000000009, 0.19460006823, 51708.08511027749],
    [0.00000000009, 5.42812340959, 207594.0903979837],
    [0.00000000009, 0.25321773369, 156101.06447605268],
    [0.00000000012, 6.08676982525, 176954.23375935067],
    [0.00000000009, 1.85021451264, 68242.11596210669],
    [0.00000000009, 2.19168596252, 1910.9556657337],
    [0.00000000009, 1.01460352352, 50586.48957038109],
    [0.00000000009, 1.60908201613, 52609.7618385087],
    [0.00000000008, 3.02342551822, 29530.2342690561],
    [0.00000000009, 2.83792438251, 205.9417309537],
    [0.00000000009, 3.48790336223, 55516.6625273317],
    [0.00000000011, 2.35570208491, 52022.2712901471],
    [0.00000000011, 3.36653560664, 157057.35363202327],
    [0.00000000008, 1.31427690069, 39629.56816154889],
    [0.0000000001, 1.95365576783, 52382.23564906909],
    [0.00000000008, 5.91790300447, 52182.67865953191],
    [0.0000000001, 5.89081572614, 40565.4981422577],
    [0.00000000008, 4.44673072353, 103.3365917021],
    [0.00000000008, 0.6025414934, 157483.26240853727],
    [0.00000000008, 0.07994652584, 27177.8557502513],
    [0.00000000008, 5.58367850537, 24998.4381678641],
    [0.00000000009, 3.23707766893, 19.42594341629],
    [0.0000000001, 0.69943263197, 536.5606946119],
    [0.0000000001, 3.22927666969, 260878.78759825832],
    [0.00000000008, 6.13315569962, 48847.9144443517],
    [0.00000000008, 6.23628865773, 860.55374623631],
    [0.00000000008, 4.33455466105, 26720.93069837089],
    [0.00000000009, 0.87327236491, 25654.43522118089],
    [0.00000000009, 4.71644893845, 63498.22656396929],
    [0.00000000008, 2.95337805438, 52595.53474450709],
    [0.00000000008, 2.09085109942, 130446.87307235529],
    [0.00000000007, 3.35858694831, 50697.1835265675],
    [0.00000000008, 5.66351050239, 1224.06165826211],
    [0.00000000009, 4.15418404, 19316.9487228451],
    [0.00000000007, 5.10075848971, 13541.17738500769],
    [0.00000000009, 3.23441439127, 130443.64086071249],
    [0.00000000007, 2.30584818184, 209812.84750217048],
    [0.00000000007, 0.64823715471, 9384.59719059169],
    [0.00000000007, 0.61661379288, 46848.0863572821],
    [0.00000000007, 3.6419917953, 172402.28026229187],
    [0.00000000007, 0.75404668288, 846.3266522347],
    [0.00000000007, 3.05134673809, 27044.4361150283],
    [0.00000000007, 1.99335698169, 150244.58681693728],
    [0.00000000009, 3.93094161276, 26735.1577923725],
    [0.00000000007, 4.75721708287, 52325.61329776649],
    [0.00000000007, 1.46600264602, 45892.9742506405],
    [0.00000000008, 2.77799241232, 52169.42154173189],
    [0.00000000008, 5.13696206564, 83924.79765639128],
    [0.00000000007, 5.38422375135, 80597.1496350781],
    [0.00000000006, 3.78360025001, 52279.14287485049],
    [0.00000000006, 3.14185350605, 51013.57539622409],
    [0.00000000008, 3.74001326185, 129387.49114216608],
    [0.00000000009, 3.71121213994, 955.8435590921],
    [0.00000000008, 1.50347216209, 77727.14873011068],
    [0.00000000006, 1.00543740922, 79330.44871939608],
    [0.00000000007, 5.56521824483, 78378.3925308913],
    [0.00000000007, 5.54385794189, 51219.96272405629],
    [0.00000000006, 4.20431417253, 129373.26404816448],
    [0.00000000007, 1.63093386109, 26162.928557625],
    [0.00000000006, 3.53855282447, 103241.99019671988],
    [0.00000000006, 3.70872609374, 3340.36860921629],
    [0.00000000006, 3.67291216777, 35472.9879671329],
    [0.00000000006, 4.50914445356, 130653.05862079248],
    [0.00000000006, 6.20953170755, 110.45013870291],
    [0.00000000007, 1.43696950392, 77631.16950289288],
    [0.00000000006, 1.84528711156, 53131.16220727349],
    [0.00000000006, 4.02329719726, 26013.3653604904],
    [0.00000000006, 0.25065144064, 25508.4593720589],
    [0.00000000006, 5.41297359057, 26667.8345460565],
    [0.00000000006, 1.27873892607, 70268.93716521488],
    [0.00000000006, 3.75153393501, 103918.14464590348],
    [0.00000000008, 0.93245740025, 157587.0445971179],
    [0.00000000006, 1.85606762274, 6885.39370741431],
    [0.00000000007, 4.77971152102, 214364.80099922928],
    [0.00000000007, 4.3658808027, 25754.2910182883],
    [0.00000000007, 1.29774422851, 26422.0028998271],
    [0.00000000006, 2.52395990409, 60055.65161900389],
    [0.00000000006, 6.00893693971, 78149.51395352086],
    [0.00000000005, 0.89617169225, 50064.3997872543],
    [0.00000000006, 2.63212801251, 128221.0024211677],
    [0.00000000006, 4.95615912967, 75615.49841673308],
    [0.00000000005, 1.27204675441, 137678.43511695447],
    [0.00000000007, 5.96534970508, 56727.51596272369],
    [0.00000000007, 5.86123151663, 8194.0315157251],
    [0.00000000005, 6.05965648339, 130226.46042991648],
    [0.00000000006, 5.74195245077, 80382.71710258449],
    [0.00000000006, 2.26934702805, 51653.47268253809],
    [0.00000000006, 0.06833462464, 123669.0489241089],
    [0.00000000006, 3.85232597863, 72602.13355808688],
    [0.00000000006, 4.43482215622, 50056.79860528649],
    [0.00000000005, 1.17789065193, 102769.89703549728],
    [0.00000000006, 3.77265893918, 74820.89066227368],
    [0.00000000006, 1.81837030655, 161079.6161639875],
    [0.00000000006, 3.17899498144, 103932.37173990508],
    [0.00000000006, 2.61088164463, 25234.9505773057],
    [0.00000000007, 1.11412129297, 154938.58977164488],
    [0.00000000005, 3.94989870298, 419.2408263917],
    [0.00000000005, 3.88779112513, 19406.9221056581],
    [0.00000000006, 3.53467301913, 1265.81129610991],
    [0.00000000007, 0.99187081299, 64901.5035354069],
    [0.00000000005, 2.45437001625, 73711.51211018028],
    [0.00000000005, 0.40751082829, 78213.95662030189],
    [0.00000000006, 0.47609620784, 182085.87484340827],
    [0.00000000005, 0.72963478402, 102755.66994149568],
    [0.00000000005, 3.23310371062, 40565.01050729069],
    [0.00000000005, 4.56090628241, 102.84895673509],
    [0.00000000005, 2.7303262494, 51748.96427478889],
    [0.00000000005, 2.42117857215, 53399.86794141051],
    [0.00000000005, 3.99699244254, 27780.31262856009],
    [0.00000000005, 6.27879128389, 80482.22271142589],
    [0.00000000005, 4.04842386586, 25938.5837619231],
    [0.00000000005, 0.51237606895, 26402.33313892731],
    [0.00000000005, 5.15124896226, 25773.96077918809],
    [0.00000000005, 1.58549672991, 77616.94240889128],
    [0.00000000005, 2.07804016284, 34282.4222922663],
    [0.00000000006, 0.18266035721, 50050.17269325269],
    [0.00000000005, 3.56668263605, 17893.8716258491],
    [0.00000000004, 2.54682197432, 130432.64597835368],
    [0.00000000004, 1.97821363637, 51852.54468397449],
    [0.00000000004, 0.6638766674, 32370.73517408209],
    [0.00000000005, 2.92531330514, 204151.51545301828],
    [0.00000000006, 3.31682565623, 75930.75684933408],
    [0.00000000004, 3.69733037417, 25668.17468021549],
    [0.00000000005, 6.08000873981, 6043.9847638919],
    [0.00000000005, 4.31437334805, 39450.5966658569],
    [0.00000000005, 3.85449175904, 24491.96051677309],
    [0.00000000004, 2.80245159203, 51955.63745819309],
    [0.00000000004, 5.66172545911, 103498.66000202828],
    [0.00000000005, 1.63974900109, 52396.4627430707],
    [0.00000000004, 4.13434256469, 104505.6351942651],
    [0.00000000005, 4.01690246624, 23754.46293121869],
    [0.00000000005, 0.99791835393, 123201.08393375449],
    [0.00000000004, 1.49755025165, 54087.2495838491],
    [0.00000000004, 5.20879448063, 637.24008950771],
    [0.00000000004, 2.1653964739, 28791.7631137333],
    [0.00000000004, 3.49822855731, 23384.5308043821],
    [0.00000000005, 6.09748705519, 53029.2464823839],
    [0.00000000005, 4.96740570225, 18848.98373249069],
    [0.00000000004, 3.38348270644, 26824.02347258949],
    [0.00000000004, 2.28014232477, 25352.2704455259],
    [0.00000000004, 5.11054976948, 133882.3344703199],
    [0.00000000004, 2.44432694792, 132658.5166295413],
    [0.00000000004, 4.79464066723, 53772.23654291649],
    [0.00000000004, 3.58245667544, 183571.1655501115],
    [0.00000000004, 1.18282836563, 167850.32676523307],
    [0.00000000005, 0.57469466163, 145204.9985686243],
    [0.00000000004, 2.9194232821, 27171.2271913513],
    [0.00000000004, 2.74420174911, 25005.0667267641],
    [0.00000000004, 4.57300561972, 50483.8844311295],
    [0.00000000004, 1.71297602638, 78786.53066029989],
    [0.00000000004, 4.98597716653, 949.4194264533],
    [0.00000000005, 5.48294820542, 45892.48661567349],
    [0.00000000004, 5.09042463265, 1795.5022612045],
    [0.00000000005, 3.41506026848, 26709.8907598969],
    [0.00000000005, 2.24856476273, 25466.4031582185],
    [0.00000000004, 5.8417274779, 52065.84377941249],
    [0.00000000004, 1.67956658507, 2222.1004520805],
    [0.00000000004, 2.6851768601, 78270.58180110609],
    [0.00000000004, 4.37036821346, 25653.94758621389],
    [0.00000000004, 3.79249696812, 49842.36607279289],
    [0.00000000004, 0.1906865338, 143005.9112253373],
    [0.00000000004, 3.27752582001, 78800.75775430149],
    [0.00000000004, 4.85511136724, 65697.31390725628],
    [0.00000000003, 0.19189003895, 52195.23222656469],
    [0.00000000004, 5.02476065705, 130459.42928625426],
    [0.00000000004, 3.97588615914, 24491.47288180609],
    [0.00000000004, 4.14710532879, 3178.38960805111],
    [0.00000000004, 2.12747516147, 220.16882495529],
    [0.00000000004, 4.96500381777, 52250.8316991992],
    [0.00000000003, 4.30211830006, 78160.86046798748],
    [0.00000000004, 4.46270461199, 87367.86023632369],
    [0.00000000004, 1.72859821695, 130435.87818999648],
    [0.00000000004, 4.85546199905, 53234.94439585409],
    [0.00000000004, 1.63790933088, 26575.7817103119],
    [0.00000000004, 4.02571570033, 25600.5122078035],
    [0.00000000003, 0.66645810174, 1486.2239385487],
    [0.00000000005, 4.92448477691, 86144.04239554508],
    [0.00000000004, 2.91181818574, 32132.3755404331],
    [0.00000000004, 2.61773549272, 66653.40128383189],
    [0.00000000003, 1.93014248251, 52310.1591502169],
    [0.00000000003, 3.81387230068, 45290.90021070109],
    [0.00000000003, 0.34402480925, 70383.86408886709],
    [0.00000000003, 4.41765442359, 52252.31617190749],
    [0.00000000005, 1.98227688514, 52808.83383994509],
    [0.00000000003, 5.60337796614, 1588.82907780029],
    [0.00000000004, 5.75007070234, 58857.2749540315],
    [0.00000000004, 4.77171683373, 51951.70530492999],
    [0.00000000003, 3.97223691848, 50264.8506174147],
    [0.00000000004, 2.74364830901, 20043.9183776823],
    [0.00000000004, 5.35376721002, 128320.99566497609],
    [0.00000000003, 5.53627007155, 25986.18444079209],
    [0.00000000003, 0.12735495966, 26190.1094773233],
    [0.00000000004, 3.03031240281, 136722.8353753459],
    [0.00000000003, 4.4133465599, 65717.47130312308],
    [0.00000000003, 4.1958152592, 181026.49291321906],
    [0.00000000003, 2.7275567055, 51535.66517935089],
    [0.00000000004, 1.89805960768, 129799.86223904048],
    [0.00000000003, 0.20996976206, 26073.91986505609],
    [0.00000000003, 5.45365526915, 26102.3740530593],
    [0.00000000003, 3.40818167058, 52168.44891866409],
    [0.00000000004, 0.98011046066, 52155.8927047651],
    [0.00000000004, 2.86756899369, 37698.6989174319],
    [0.00000000003, 5.28107423901, 51109.06698847489],
    [0.00000000003, 3.44421079458, 26247.4486938499],
    [0.00000000003, 2.21941423663, 25928.8452242655],
    [0.00000000004, 1.88058917739, 468.20880783791],
    [0.00000000004, 4.84952063164, 132028.83242063827],
    [0.00000000004, 4.04256757305, 25661.06113321469],
    [0.00000000003, 5.18635157447, 2703.3723371921],
    [0.00000000004, 1.14854014554, 166740.9482131397],
    [0.00000000004, 1.66492426174, 59414.23805726489],
    [0.00000000003, 0.11263836231, 61560.8911087071],
    [0.00000000003, 1.57772720091, 79316.22162539448],
    [0.00000000003, 4.62863855126, 130866.35771623049],
    [0.00000000003, 4.83516317774, 79219.06534884768],
    [0.00000000003, 4.03532450201, 24506.18761077469],
    [0.00000000003, 2.23216290209, 51868.4924796623],
    [0.00000000003, 1.28804069436, 19202.50943415989],
    [0.00000000003, 4.56968797112, 40852.8983673605],
    [0.00000000003, 4.38565150092, 116783.89903417809],
    [0.00000000003, 4.07787007514, 105460.74730090669],
    [0.00000000003, 1.85194703747, 48835.43767393209],
    [0.00000000003, 5.69146662946, 114.68310616872],
    [0.00000000003, 0.19144773585, 76785.08666814168],
    [0.00000000003, 2.42893576806, 81592.08889848628],
    [0.00000000003, 1.2469250691, 95247.46175469569],
    [0.00000000003, 3.12006782424, 52171.68113030689],
    [0.00000000004, 0.40583501169, 78110.17443172129],
    [0.00000000003, 0.88564181183, 68050.18006102808],
    [0.00000000003, 4.02600027527, 38653.81102407349],
    [0.00000000003, 2.89741869348, 2219.0009216703],
    [0.00000000003, 4.3526172887, 52179.4438010229],
    [0.00000000003, 5.72167155686, 52286.25642185129],
    [0.00000000003, 4.88587761079, 76674.39271195528],
    [0.00000000003, 2.50139495886, 126997.18458038908],
    [0.00000000003, 6.06197330359, 77101.47853779829],
    [0.00000000003, 5.97751979418, 77741.37582411229],
    [0.00000000003, 2.52437891388, 8989.22388794889],
    [0.00000000003, 3.70897028008, 77733.77464214448],
    [0.00000000003, 6.2418844872, 286966.6907398325],
    [0.00000000003, 5.68828427997, 74.53778108379],
    [0.00000000003, 2.64767376731, 632.5399218297],
    [0.00000000004, 6.05038593627, 28287.2343023447],
    [0.00000000004, 5.89642440212, 23889.0596157707],
    [0.00000000003, 3.64902489843, 75930.26921436709],
    [0.00000000002, 3.26392643567, 182188.96761762688],
    [0.00000000003, 6.24797687447, 27250.62166346549],
    [0.00000000003, 5.71051457818, 51315.74017187909],
    [0.00000000003, 2.95050506838, 52182.67601266569],
    [0.00000000002, 0.14560269876, 121335.85253123689],
    [0.00000000002, 2.31563547899, 110012.70079796549],
    [0.00000000002, 2.79146825409, 2008.8013566425],
    [0.00000000002, 5.33939376534, 24925.6722546499],
    [0.00000000003, 5.02309471101, 39629.08052658189],
    [0.00000000003, 4.81867653228, 3340.8562441833],
    [0.00000000002, 5.06629871936, 23439.20449861769],
    [0.00000000002, 6.21328369214, 29415.79498037089],
    [0.00000000003, 2.40182139304, 25131.85780308709],
    [0.00000000003, 4.68865672548, 51123.29408247649],
    [0.00000000003, 5.00160560591, 90695.50825763689],
    [0.00000000002, 4.84919130926, 24505.69997580769],
    [0.00000000003, 4.38371673981, 26011.8808877821],
    [0.00000000002, 4.91686748502, 51329.9672658807],
    [0.00000000003, 0.23735872795, 81604.56566890588],
    [0.00000000003, 0.95743283729, 52813.0463726561],
    [0.00000000003, 1.59253054642, 391318.79094109643],
    [0.00000000002, 4.54043739808, 196137.3172500943],
    [0.00000000003, 2.85252650926, 156507.9929060289],
    [0.00000000003, 2.50847406676, 27727.2164762457],
    [0.00000000003, 3.15515096445, 24449.0774418697],
    [0.00000000002, 1.06183386008, 78057.76769376888],
    [0.00000000003, 4.75030126782, 78313.94986411028],
    [0.00000000003, 2.83857270203, 203042.13690092487],
    [0.00000000003, 4.41522279829, 34082.6754010819],
    [0.00000000002, 1.11682523208, 38634.6288981407],
    [0.00000000003, 5.82930728472, 78257.32468330608],
    [0.00000000002, 3.32397187418, 49527.10764019189],
    [0.00000000003, 3.52707759552, 52041.9410510469],
    [0.00000000002, 5.03728139459, 104819.8213741347],
    [0.00000000002, 0.3424965643, 62197.88738073129],
    [0.00000000003, 3.81629136441, 103291.98681862408],
    [0.00000000002, 0.38902235709, 51962.26337022689],
    [0.00000000002, 5.06187057536, 35077.61466449009],
    [0.00000000003, 3.50433403816, 96357.32794175608],
    [0.00000000002, 5.63169833454, 25021.16384690069],
    [0.00000000002, 3.17912670229, 66652.91364886488],
    [0.00000000002, 0.74572876767, 199599.0743209924],
    [0.00000000002, 2.95582870605, 9103.6631766341],
    [0.00000000002, 1.09917701972, 74923.34081550628],
    [0.00000000002, 0.60560213674, 17098.67925362531],
    [0.00000000002, 5.11946015221, 78470.13879064328],
    [0.00000000002, 2.53118536507, 101703.40155830729],
    [0.00000000002, 2.20613703147, 77307.66408623548],
    [0.00000000002, 0.59446302071, 104991.75367009429],
    [0.00000000002, 2.42950804559, 86143.55476057807],
    [0.00000000002, 4.03918468742, 26312.4917547596],
    [0.00000000003, 4.60683796484, 69159.55861312148],
    [0.00000000002, 2.79539090828, 27676.73221937449],
    [0.00000000002, 0.80954348332, 91919.81373338249],
    [0.00000000002, 3.64345901161, 225687.46509753366],
    [0.00000000002, 6.09474483307, 60369.83779887349],
    [0.00000000002, 4.02958262076, 26184.1261862755],
    [0.00000000002, 1.63404241045, 25992.1677318399],
    [0.00000000002, 4.78056230516, 62388.84801187589],
    [0.00000000002, 5.2928178752, 7880.3329708225],
    [0.00000000003, 5.23217095654, 51534.63653889291],
    [0.00000000002, 1.02304147154, 24608.79275002629],
    [0.00000000002, 0.08655833344, 183145.2567735975],
    [0.00000000002, 3.38094681034, 177288.0897001201],
    [0.00000000002, 2.7396425909, 26397.42528171349],
    [0.00000000002, 2.92398244031, 25778.86863640189],
    [0.00000000002, 5.05032388283, 42791.2090925567],
    [0.00000000002, 0.32496221869, 38813.11275886569],
    [0.00000000002, 5.11101145665, 51539.0538286077],
    [0.00000000002, 4.02707586748, 24952.4700871645],
    [0.00000000002, 1.63654916373, 27223.8238309509],
    [0.00000000002, 4.56989494681, 103719.07264446709],
    [0.00000000002, 3.21686304521, 25984.3647704771],
    [0.00000000002, 2.446761986, 26191.9291476383],
    [0.00000000002, 0.73451437899, 25927.7395896729],
    [0.00000000002, 4.92911065222, 26248.5543284425],
    [0.00000000002, 5.25833412712, 113341.32408921266],
    [0.00000000002, 3.14486706475, 53265.7588918255],
    [0.00000000002, 1.466288775, 51842.1941598625],
    [0.00000000002, 2.47984490464, 16066.3096789583],
    [0.00000000002, 2.09863898672, 29550.3916649229],
    [0.00000000002, 3.56498604449, 22625.9022531925],
    [0.00000000002, 1.44463204026, 27037.32256802749],
    [0.00000000002, 4.21899299095, 25138.9713500879],
    [0.00000000002, 0.93669101848, 157482.7747735703],
    [0.00000000002, 0.12919974221, 52817.46366237089],
    [0.00000000002, 3.79805429136, 104202.2931866457],
    [0.00000000002, 4.69592084098, 25550.85481199529],
    [0.00000000002, 5.21767038269, 52388.86156110289],
    [0.00000000002, 3.65031025117, 233731.99016146208],
    [0.00000000002, 3.29338443989, 54824.5049261049],
    [0.00000000002, 1.7383650466, 13655.6166736929],
    [0.00000000002, 4.20276068024, 78793.15657233368],
    [0.00000000002, 4.96143878613, 168959.21768235945],
    [0.00000000002, 6.25349918418, 205260.89400511168],
    [0.00000000002, 3.21379506167, 128106.07549751546],
    [0.00000000002, 2.12894187827, 50910.4826220055],
    [0.00000000002, 3.08974476939, 51859.65823097529],
    [0.00000000002, 1.51881438178, 25863.8021633558],
    [0.00000000002, 4.40672336509, 53758.00944891489],
    [0.00000000002, 5.60768237774, 52492.4419702885],
    [0.00000000002, 0.61004720971, 735.6326960483],
    [0.00000000002, 0.61004720971, 736.1203310153],
    [0.00000000002, 1.54306118494, 1066.2516597065],
    [0.00000000002, 1.6586083561, 215474.17955132265],
    [0.00000000002, 5.50882009325, 26077.1012587938],
    [0.00000000002, 0.15480493796, 26099.1926593216],
    [0.00000000002, 1.15953086967, 96356.84030678908],
    [0.00000000002, 2.8247748566, 50579.37602338029],
    [0.00000000002, 4.95075276458, 176332.4899585115],
    [0.00000000002, 5.17774922517, 78896.73698151928],
    [0.00000000002, 0.26673303771, 26411.6523757151],
    [0.00000000002, 5.49340805923, 87253.42094763846],
    [0.00000000002, 4.42579128459, 181659.96606689427],
    [0.00000000002, 4.56681824452, 23976.00901071309],
    [0.00000000002, 2.69925276343, 102232.60488843489],
    [0.00000000002, 3.44678527119, 52483.6077216015],
    [0.00000000002, 0.27890618815, 199599.56195595945],
    [0.00000000002, 3.49834714879, 25933.8805136059],
    [0.00000000002, 5.12143437332, 23439.6921335847],
    [0.00000000001, 4.63971494884, 27351.3043216359],
    [0.00000000001, 1.02391008237, 24824.9895964795],
    [0.00000000001, 4.66880968358, 78697.66498008289],
    [0.00000000002, 5.51544937611, 60370.3254338405],
    [0.00000000001, 3.24905067191, 51596.3625136331],
    [0.00000000002, 4.53665275519, 103815.05187168489],
    [0.00000000002, 1.487072906, 33326.33491569069],
    [0.00000000002, 0.70194343478, 51226.87449166209],
    [0.00000000001, 2.48229161835, 77307.86586563049],
    [0.00000000002, 2.89900338624, 50952.23225985329],
    [0.00000000002, 5.06785546369, 65716.98366815608],
    [0.00000000001, 3.03622093333, 231348.79714668586],
    [0.00000000001, 1.22871462641, 163765.85062356168],
    [0.00000000002, 5.81358049715, 34281.9346572993],
    [0.00000000001, 0.01895053315, 25234.46294233869],
    [0.00000000001, 5.99824107896, 147423.7556728111],
    [0.00000000002, 1.73430601364, 26514.25751496669],
    [0.00000000001, 0.46522663694, 3442.3311274819],
    [0.00000000001, 2.66766894498, 102762.29585352947],
    [0.00000000001, 4.19740391458, 189854.24140010288],
    [0.00000000001, 4.71704307559, 54879.6662553075],
    [0.00000000002, 4.94622107659, 94330.01910368088],
    [0.00000000002, 3.2270823243, 22747.04689739089],
    [0.00000000001, 5.03032609104, 138319.84867869344],
    [0.00000000001, 4.79191528728, 52509.9060414013],
    [0.00000000001, 5.71338507031, 35191.56631820829],
    [0.00000000002, 5.64922837609, 26713.81715137009],
    [0.00000000002, 0.01439665512, 25462.4767667453],
    [0.00000000001, 6.11047772238, 76667.27916495448],
    [0.00000000001, 1.01940165259, 116783.41139921108],
    [0.00000000002, 4.11674730434, 23919.3864767751],
    [0.00000000002, 1.54687772687, 28256.9074413403],
    [0.00000000002, 2.55506634692, 99024.38027539749],
    [0.00000000001, 5.53588784644, 112546.1317169889],
    [0.00000000002, 4.3694059883, 26241.4381345755],
    [0.00000000001, 0.47478664591, 129329.89333829407],
    [0.00000000002, 3.32047464917, 118828.71993201328],
    [0.00000000001, 3.81811027049, 49956.8053614781],
    [0.00000000001, 1.5830059177, 28199.79727243529],
    [0.00000000001, 1.36639947851, 68241.62832713968],
    [0.00000000001, 5.16896085902, 103821.67778371868],
    [0.00000000002, 1.67830961245, 25441.13612574289],
    [0.00000000001, 4.61230342742, 80175.1527254233],
    [0.00000000002, 0.48315631972, 23962.2695516785],
    [0.00000000001, 3.50023943727, 26934.2297938089],
    [0.00000000001, 5.56740631565, 42153.72518556549],
    [0.00000000001, 0.57318968993, 50380.79165691089],
    [0.00000000001, 4.87428065409, 241562.08269289686],
    [0.00000000001, 6.24255788428, 55618.1374106303],
    [0.00000000001, 4.91389387543, 92740.81679043909],
    [0.00000000002, 5.62002771737, 27567.01353312209],
    [0.00000000002, 0.86522458907, 98690.03669966108],
    [0.00000000001, 3.83786759867, 173511.17117941825],
    [0.00000000001, 3.83786759867, 173511.6588143853],
    [0.00000000001, 3.73710353066, 102018.17235594128],
    [0.00000000001, 3.98058009404, 49954.19346603489],
    [0.00000000001, 0.70035139387, 155461.16718973868],
    [0.00000000001, 1.23780419541, 193937.74227184022],
    [0.00000000001, 4.37321488294, 26927.11624680809],
    [0.00000000001, 1.29041014827, 25249.1776713073],
    [0.00000000001, 0.70197977264, 149642.51277699787],
    [0.00000000001, 2.49619638334, 112231.45790215228],
    [0.00000000001, 3.3160058415, 639.6534688305],
    [0.00000000001, 2.81858522024, 28420.8557169627],
    [0.00000000002, 0.06574072735, 55503.69812194508],
    [0.00000000001, 5.90451405265, 35472.50033216589],
    [0.00000000001, 1.51650944248, 48997.9043100643],
    [0.00000000001, 5.22070652557, 27006.0772450395],
    [0.00000000001, 0.44291850564, 25170.2166730759],
    [0.00000000001, 1.78735146281, 106263.05586699749],
    [0.00000000001, 4.72084316953, 90989.40667698109],
    [0.00000000001, 4.99715761034, 50690.06997956669],
    [0.00000000001, 0.33557225431, 77836.86741636308],
    [0.00000000001, 3.3138645999, 125112.2834169717],
    [0.00000000001, 5.55100305938, 26610.23674218449],
    [0.00000000001, 4.62894445056, 143980.69309287865],
    [0.00000000001, 0.73494247156, 153084.60008699627],
    [0.00000000001, 1.17231831682, 45404.8518644193],
    [0.00000000001, 2.54701077766, 2332.9525753885],
    [0.00000000001, 4.07473618347, 76152.30292882849],
    [0.00000000001, 2.13363904714, 45494.33761226529],
    [0.00000000001, 0.33894588198, 24925.18461968289],
    [0.00000000001, 2.22391897375, 50593.60311738189],
    [0.00000000001, 5.06402826535, 115674.03284711768],
    [0.00000000001, 6.21839548284, 151200.1865585459],
    [0.00000000001, 1.41453859, 84308.18182358149],
    [0.00000000001, 0.92714278131, 129379.88996019828],
    [0.00000000001, 5.82040259792, 24073.1652872599],
    [0.00000000001, 6.12640774047, 28103.1286308555],
    [0.00000000001, 2.07741344436, 19406.43447069109],
    [0.00000000001, 0.51650041444, 24844.6593573793],
    [0.00000000001, 5.14712461677, 27331.6345607361],
    [0.00000000001, 1.95998075094, 154408.89880655028],
    [0.00000000001, 6.15204641708, 163298.37326817427],
    [0.00000000001, 5.62631785594, 58220.2786820073],
    [0.00000000001, 2.38135876415, 97670.63153038069],
    [0.00000000001, 0.13326662566, 22759.5236678105],
    [0.00000000001, 1.74239852457, 24395.9812895553],
    [0.00000000001, 5.76996425564, 92741.3044254061],
    [0.00000000001, 5.18001187713, 128850.19899510368],
    [0.00000000001, 1.70882749408, 25984.56654987209],
    [0.00000000001, 4.63169895688, 24357.0246061251],
    [0.00000000001, 1.03192607433, 27819.2693119903],
    [0.00000000001, 6.1880348766, 183724.45672562925],
    [0.00000000001, 0.75326620837, 26624.46383618609],
    [0.00000000001, 1.73910591832, 25455.3632197445],
    [0.00000000001, 1.73910591832, 25454.87558477749],
    [0.00000000001, 4.91320505829, 189385.78877478145],
    [0.00000000001, 4.91320505829, 189386.27640974845],
    [0.00000000001, 0.33962058759, 209659.06869168568],
    [0.00000000001, 0.57831111391, 109.9625037359],
    [0.00000000001, 3.0119252914, 82815.41910429788],
    [0.00000000001, 5.28068518753, 147423.26803784407],
    [0.00000000001, 5.41436422726, 23704.95394428149],
    [0.00000000001, 0.24926080395, 28471.3399738339],
    [0.00000000001, 5.2198522398, 51440.17358710009],
    [0.00000000001, 5.81513934032, 25035.39094090229],
    [0.00000000001, 5.63545263237, 26555.6243144451],
    [0.00000000001, 4.02649464248, 26177.63270690369],
    [0.00000000001, 1.63713038873, 25998.6612112117],
    [0.00000000001, 1.9871349945, 233681.99353955788],
    [0.00000000001, 3.17318181579, 21650.63275068411],
    [0.00000000001, 2.49044321542, 30525.66116743129],
    [0.00000000001, 1.93284114667, 111590.04434041328],
    [0.00000000001, 4.15055550488, 24203.24579564031],
    [0.00000000001, 1.51306952632, 27973.04812247509],
    [0.00000000001, 4.04308594118, 99799.41525175449],
    [0.00000000001, 2.47194170898, 128106.56313248246],
    [0.00000000001, 3.82198016519, 104198.0775732955],
    [0.00000000001, 1.80561843054, 132350.9590085717],
    [0.00000000001, 3.89409837101, 6680.98103591609],
    [0.00000000001, 3.02028039042, 26202.09861277591],
    [0.00000000001, 2.86028052056, 50167.49256147289],
    [0.00000000001, 3.13915436914, 313054.5938814067],
    [0.00000000001, 0.04271369503, 131548.65044248087],
    [0.00000000001, 4.92373111036, 85502.14119883909],
    [0.00000000001, 2.02772617744, 51542.77872635169],
    [0.00000000001, 5.92130408913, 102018.65999090829],
    [0.00000000001, 3.43111189593, 51322.36608391289],
    [0.00000000001, 1.54854247637, 78413.51643934069],
    [0.00000000001, 6.2816268996, 156531.54400228668],
    [0.00000000001, 1.20531548605, 105306.96849042189],
    [0.00000000001, 2.5842603073, 35077.12702952309],
    [0.00000000001, 1.0981231112, 155467.7931017725],
    [0.00000000001, 1.3316240742, 45290.41257573408],
    [0.00000000001, 3.52374631003, 1162.23088692429],
    [0.00000000001, 4.28752586027, 77211.19722405069],
    [0.00000000001, 4.51338458149, 25152.2169783489],
    [0.00000000001, 1.15024044972, 27024.07693976651],
    [0.00000000001, 4.26343278626, 247223.41474204906],
    [0.00000000001, 3.96461816746, 183674.94773869208],
    [0.00000000001, 3.14345130679, 25131.37016812009],
    [0.00000000001, 6.06920679029, 26126.2799946955],
    [0.00000000001, 5.8776035481, 26050.0139234199],
    [0.00000000001, 0.97484682364, 71980.38975724769],
    [0.00000000001, 5.34892363416, 27388.97377726269],
    [0.00000000001, 0.31470139705, 24787.3201408527],
    [0.00000000001, 0.5168921853, 155475.3942837403],
    [0.00000000001, 0.66134795423, 51756.07782178969],
    [0.00000000001, 2.18850969113, 54086.76194888209],
    [0.00000000001, 4.14165011369, 94138.08320260228],
    [0.00000000001, 5.17339556279, 24602.8562523545],
    [0.00000000001, 0.49022946842, 27573.4376657609],
    [0.00000000001, 4.40553516948, 121335.36489626988],
    [0.00000000001, 0.40614537067, 198490.18340386607],
    [0.00000000001, 0.84588819348, 181555.69624334667],
    [0.00000000001, 5.13509102157, 156534.7762139295],
    [0.00000000001, 1.73614423183, 12725.6972522585],
    [0.00000000001, 0.52115552294, 130006.04778747768],
    [0.00000000001, 1.5990347454, 89586.12970554348],
    [0.00000000001, 3.74413194011, 131394.87163199607],
    [0.00000000001, 0.61669479944, 77039.64776646046],
];

const X2: &[Term] = &[
    [0.00020000263, 5.96893489541, 26088.1469590577],
    [0.00008268782, 0.41593027178, 0.2438174835],
    [0.00002498175, 3.38864668295, 52176.0501006319],
    [0.00000949347, 0.79533142414, 78263.95324220609],
    [0.00000776108, 5.52747825416, 26087.65932409069],
    [0.00000371109, 4.03419264198, 104351.8563837803],
    [0.00000130259, 0.87132938107, 130439.75952535449],
    [0.00000069902, 2.020660516, 52175.56246566489],
    [0.00000042865, 3.95497707255, 156527.6626669287],
    [0.00000013564, 0.74070016642, 182615.56580850287],
    [0.00000011344, 4.89785767709, 78263.46560723908],
    [0.00000004184, 3.80256859065, 208703.46895007708],
    [0.00000002952, 1.21119140823, 24978.7684069643],
    [0.00000002715, 4.19935661957, 27197.5255111511],
    [0.00000002412, 1.63037150116, 104351.36874881329],
    [0.00000001268, 0.57748866225, 234791.37209165128],
    [0.00000001017, 4.33432055001, 51066.6715485385],
    [0.00000000591, 4.73978384246, 130439.27189038748],
    [0.00000000372, 0.82364022383, 53285.4286527253],
    [0.00000000379, 3.63308186625, 260879.27523322543],
    [0.00000000353, 1.13633330939, 77154.57469011268],
    [0.00000000353, 2.07182576415, 1109.1347346099],
    [0.00000000259, 4.03007203572, 20426.8149099055],
    [0.00000000259, 5.19867290786, 1059.6257476727],
    [0.00000000198, 1.36980571393, 27043.7467006663],
    [0.00000000178, 5.96725527175, 31749.4790082099],
    [0.00000000161, 1.00641443984, 1589.3167127673],
    [0.00000000148, 2.97453779319, 4552.1973145423],
    [0.00000000145, 1.5944802929, 21536.1934619989],
    [0.00000000158, 1.60582346371, 156527.17503196167],
    [0.00000000169, 4.00782299083, 25132.5472174491],
    [0.00000000134, 5.93157203334, 25558.4559939631],
    [0.00000000112, 0.40462785686, 286967.1783747996],
    [0.00000000111, 5.6570404776, 26617.8379241523],
    [0.00000000122, 1.49577379421, 46514.7180514797],
    [0.00000000125, 1.3963610036, 23869.3898548709],
    [0.00000000111, 2.2897289261, 14765.48286075331],
    [0.00000000106, 4.77037689879, 51116.6681704427],
    [0.0000000012, 4.20635563605, 103242.47783168689],
    [0.00000000113, 2.57148364836, 27147.5288892469],
    [0.00000000105, 4.1989568828, 28306.90406324449],
    [0.00000000086, 5.07571410391, 19317.43635781211],
    [0.00000000103, 5.90310312996, 5661.0882316687],
    [0.00000000067, 6.2610956889, 9104.1508116011],
    [0.00000000076, 1.89488008069, 529.9347825781],
    [0.00000000066, 4.44479405797, 50586.97720534809],
    [0.00000000066, 3.84543572024, 3442.81876244891],
    [0.00000000061, 2.83683010519, 37410.8110573621],
    [0.00000000059, 4.7400240367, 72602.62119305388],
    [0.00000000074, 1.71392170541, 22645.57201409229],
    [0.00000000056, 2.44778877932, 52705.7410657265],
    [0.00000000061, 3.55810846013, 30640.1004561165],
    [0.00000000053, 5.29509726913, 640.1411037975],
    [0.00000000056, 0.44039665586, 32858.8575603033],
    [0.00000000062, 0.55305609443, 51220.4503590233],
    [0.0000000005, 4.18169929034, 53131.6498422405],
    [0.00000000046, 3.94824823145, 27677.2198543415],
    [0.00000000045, 1.59652029747, 25973.70767037247],
    [0.00000000045, 4.05512833234, 26202.58624774291],
    [0.00000000044, 4.75905220926, 182615.07817353585],
    [0.00000000046, 2.53699777188, 27197.03787618409],
    [0.00000000046, 5.78816990516, 53235.43203082109],
    [0.00000000058, 2.08536631307, 57837.3821497841],
    [0.00000000043, 3.15018018958, 529.44714761109],
    [0.00000000042, 1.10095861133, 47624.0966035731],
    [0.00000000041, 2.92440512287, 26301.4460544957],
    [0.00000000039, 5.52297144186, 40853.3860023275],
    [0.00000000038, 2.5900299361, 25874.8478636197],
    [0.00000000045, 3.87761344478, 29530.7219040231],
    [0.00000000045, 4.83071642182, 10213.5293636945],
    [0.00000000035, 1.77114967266, 2119.00767786191],
    [0.00000000034, 0.50537233993, 56728.0035976907],
    [0.0000000004, 4.99855315823, 24978.28077199729],
    [0.0000000004, 0.98737142456, 129330.38097326108],
    [0.00000000033, 3.45515093268, 313055.08151637384],
    [0.00000000039, 5.42516034342, 955.3559241251],
    [0.00000000031, 4.38256920252, 6770.46678376209],
    [0.00000000038, 1.73621782583, 2218.51328670329],
    [0.00000000031, 1.18390533268, 12566.3955174663],
    [0.00000000032, 4.46582914668, 49957.2929964451],
    [0.00000000029, 5.65827133315, 426.8420083595],
    [0.00000000028, 5.46107883558, 43072.1431065143],
    [0.00000000025, 1.58123453631, 98690.52433462809],
    [0.0000000003, 3.15402941421, 79373.33179429949],
    [0.00000000023, 5.44646488235, 78793.64420730069],
    [0.0000000003, 0.97936081436, 77204.5713120169],
    [0.0000000002, 1.34579383399, 11322.42028082089],
    [0.00000000027, 0.95498900102, 54394.80720481869],
    [0.00000000023, 3.49479332748, 77308.35350059748],
    [0.00000000019, 5.90875785254, 83925.28529135829],
    [0.00000000022, 1.88106368245, 45405.3394993863],
    [0.0000000002, 2.33312866023, 36301.4325052687],
    [0.00000000018, 2.63764225914, 79323.33517239528],
    [0.00000000021, 2.63713620085, 13656.10430865991],
    [0.0000000002, 4.83742385337, 33326.8225506577],
    [0.00000000018, 1.65998530501, 52156.38033973211],
    [0.00000000023, 4.13597342584, 41962.7645544209],
    [0.00000000018, 6.07003180743, 52389.3491960699],
    [0.00000000017, 3.47243675916, 58946.76070187749],
    [0.00000000016, 1.64800690653, 23754.95056618569],
    [0.00000000019, 2.36847359761, 39609.8984006491],
    [0.00000000017, 0.25513432917, 51536.15281431789],
    [0.00000000018, 0.34702974356, 18849.4713674577],
    [0.00000000015, 0.9586630449, 76674.88034692229],
    [0.00000000015, 1.75514605179, 48733.47515566649],
    [0.00000000015, 4.34995902728, 853.4401992355],
    [0.00000000014, 3.61473044, 82815.90673926489],
    [0.00000000014, 5.02500731242, 52179.9314359899],
    [0.00000000014, 1.69891784853, 15874.8614128467],
    [0.00000000014, 2.36729572184, 66941.2891439017],
    [0.00000000015, 5.49473150242, 16984.2399649401],
    [0.00000000015, 5.05704278229, 38654.2986590405],
    [0.00000000013, 0.64687702919, 53765.1229959157],
    [0.00000000013, 1.62167132693, 208702.98131511008],
    [0.00000000013, 3.82178316362, 50057.2862402535],
    [0.00000000016, 2.05228361219, 51646.3591355373],
    [0.00000000012, 3.97912977913, 28421.3433519297],
    [0.00000000013, 4.04493324307, 155418.2841148353],
    [0.00000000016, 0.65996554595, 55618.6250455973],
    [0.00000000012, 3.6256993046, 5661.5758666357],
    [0.00000000015, 0.75515577986, 52195.71986153169],
    [0.00000000014, 2.81046707561, 26514.7451499337],
    [0.00000000014, 3.30095837282, 110013.18843293248],
    [0.00000000013, 0.56442607871, 213.0552779545],
    [0.00000000014, 2.1056191826, 26728.0442453717],
    [0.00000000013, 3.66951257967, 52172.1687652739],
    [0.00000000011, 5.46295418561, 63498.71419893629],
    [0.00000000011, 0.61230507574, 79219.55298381469],
    [0.0000000001, 4.66712610746, 103292.47445359109],
    [0.00000000011, 5.20556952105, 31748.99137324289],
    [0.00000000014, 3.33453776277, 6283.3196674749],
    [0.0000000001, 0.8370598871, 52290.48938931711],
    [0.00000000012, 2.60449391926, 13521.50762410789],
    [0.00000000009, 3.03188275218, 35192.0539531753],
    [0.00000000009, 1.24305000805, 76045.1961380193],
    [0.00000000011, 5.89042281055, 62389.33564684289],
    [0.0000000001, 4.16418363493, 51749.45190975589],
    [0.00000000009, 4.66321261687, 124778.42747620228],
    [0.00000000009, 0.22808750229, 339142.984657948],
    [0.00000000009, 4.75513146544, 78244.2834813063],
    [0.00000000009, 2.6426268875, 20426.32727493849],
    [0.00000000011, 2.92721365751, 38520.1896094555],
    [0.0000000001, 3.30244477369, 16983.75232997309],
    [0.00000000009, 1.16009282528, 1109.6223695769],
    [0.00000000009, 4.65609022876, 52061.61081194667],
    [0.00000000009, 2.15470374859, 104881.54734887488],
    [0.00000000008, 1.58129311338, 68050.66769599509],
    [0.00000000008, 4.01456932062, 2333.44021035551],
    [0.00000000008, 0.50473636519, 12431.79883291429],
    [0.00000000008, 4.71148146957, 28206.9108194361],
    [0.00000000008, 0.22428318331, 136101.0915745067],
    [0.00000000008, 5.13855904986, 213.5429129215],
    [0.00000000008, 1.53446312549, 24499.0740637739],
    [0.00000000008, 0.19632874417, 103396.25664217169],
    [0.00000000007, 4.83084149979, 52168.93655363109],
    [0.00000000009, 0.68229010552, 21535.70582703189],
    [0.00000000007, 5.67305147777, 53284.94101775829],
    [0.00000000007, 4.91493686906, 105461.23493587368],
    [0.00000000007, 2.13257749573, 69160.04624808849],
    [0.00000000009, 0.17767669866, 7994.77225950771],
    [0.00000000009, 3.44284310428, 73711.99974514729],
    [0.00000000008, 1.40334354171, 59414.7256922319],
    [0.00000000008, 3.92015227538, 52183.1636476327],
    [0.00000000007, 1.95913527567, 64742.2018006147],
    [0.00000000007, 1.83770637593, 78267.83457756409],
    [0.00000000007, 5.50637575808, 26107.81671995749],
    [0.00000000007, 3.29290677599, 26068.47719815791],
    [0.00000000006, 2.4808951232, 25028.7650288685],
    [0.00000000007, 6.1001091262, 51962.7510051939],
    [0.00000000007, 5.20852269117, 18208.05780571871],
    [0.00000000008, 3.20036201627, 44937.3745090319],
    [0.00000000008, 1.81720177562, 51066.18391357149],
    [0.00000000006, 5.72654755255, 105411.23831396949],
    [0.00000000007, 4.86085983191, 65697.80154222329],
    [0.00000000006, 2.84309765149, 88477.23878841709],
    [0.00000000006, 2.90025697766, 78477.2523376441],
    [0.00000000006, 6.10721529063, 52602.6482915079],
    [0.00000000007, 3.76564310534, 78283.62300310588],
    [0.00000000006, 2.54939515992, 19805.0711090663],
    [0.00000000005, 0.40790961084, 108903.8098808391],
    [0.00000000006, 2.08187740275, 129380.37759516528],
    [0.00000000005, 4.74517813371, 74821.37829724069],
    [0.00000000007, 5.47163902652, 45892.9742506405],
    [0.00000000005, 3.96385649366, 1059.1381127057],
    [0.00000000005, 2.11024903764, 26084.2656236997],
    [0.00000000005, 0.40769424239, 26092.0282944157],
    [0.00000000007, 4.95181465375, 71493.2426409605],
    [0.00000000005, 3.72498845601, 81706.5281871715],
    [0.00000000005, 1.28192740378, 51322.85371887989],
    [0.00000000005, 0.38902168011, 33968.23611239669],
    [0.00000000005, 1.36259031496, 78256.83969520529],
    [0.00000000005, 2.94315074391, 26617.35028918529],
    [0.00000000006, 0.40666986327, 78260.07190684808],
    [0.00000000004, 3.59234736829, 25661.5487681817],
    [0.00000000005, 5.20687247513, 94138.57083756929],
    [0.00000000004, 5.73436372945, 22645.08437912529],
    [0.00000000005, 5.43911125012, 93029.19228547589],
    [0.00000000004, 1.51966869369, 22760.01130277751],
    [0.00000000004, 4.11367481672, 29416.28261533789],
    [0.00000000004, 0.33419603419, 76145.18938182769],
    [0.00000000004, 0.81789657863, 181506.18725640947],
    [0.00000000004, 5.87548494754, 13521.9952590749],
    [0.00000000004, 0.98530676575, 99799.90288672148],
    [0.00000000004, 3.64991710996, 79853.02613748988],
    [0.00000000005, 5.51168134551, 44181.52165860769],
    [0.00000000004, 4.179695937, 4551.7096795753],
    [0.00000000004, 1.07013306418, 32371.2228090491],
    [0.00000000004, 4.56317466224, 32858.36992533629],
    [0.00000000004, 0.76064444657, 54509.2464935039],
    [0.00000000004, 5.34376558738, 155468.28073673949],
    [0.00000000003, 3.33102397097, 162188.99471608087],
    [0.00000000003, 1.90784099869, 24498.58642880689],
    [0.00000000005, 0.7062811834, 78271.06678920689],
    [0.00000000004, 4.75154050928, 234790.88445668426],
    [0.00000000003, 5.20128667447, 77734.26227711148],
    [0.00000000004, 4.16379409199, 7879.84533585549],
    [0.00000000004, 5.89383677298, 64608.09275102969],
    [0.00000000004, 4.51512332677, 51116.18053547569],
    [0.00000000003, 1.82486201671, 28306.41642827749],
    [0.00000000004, 5.71282679191, 39744.0074502341],
    [0.00000000003, 1.53805667122, 104332.1866228805],
    [0.00000000004, 3.89140851351, 80482.71034639288],
    [0.00000000003, 1.85783050998, 37410.32342239509],
    [0.00000000004, 1.55416627058, 24864.32911827909],
    [0.00000000003, 2.39011669525, 103822.16541868569],
    [0.00000000004, 4.09022608915, 27311.96479983631],
    [0.00000000003, 2.12318372488, 120226.47397914348],
    [0.00000000003, 4.30318589016, 102133.09927959349],
    [0.00000000003, 1.44971105205, 150866.3306177765],
    [0.00000000003, 5.04167948013, 90830.10494218889],
    [0.00000000003, 3.27662875658, 77624.05595589208],
    [0.00000000003, 3.21324303917, 129484.15978374588],
    [0.00000000003, 4.58517957507, 125887.80602829569],
    [0.00000000003, 5.16830743449, 130969.45049044909],
    [0.00000000003, 4.95343110449, 58459.1259506233],
    [0.00000000002, 0.76903109719, 6282.83203250789],
    [0.00000000003, 1.18091352454, 26941.3433408097],
    [0.00000000002, 1.6496837616, 3327.89183879669],
    [0.00000000003, 2.92429834126, 18093.13088206649],
    [0.00000000002, 1.24139720028, 25132.0595824821],
    [0.00000000003, 0.05117365042, 26095.2605060585],
    [0.00000000003, 6.12547181968, 71025.27765060609],
    [0.00000000003, 3.14802602217, 43071.65547154729],
    [0.00000000002, 5.96655122637, 114565.14192999128],
    [0.00000000002, 2.8018601399, 71980.8773922147],
    [0.00000000002, 2.32214550421, 91785.70468379749],
    [0.00000000002, 2.48797331613, 2648.6986429565],
    [0.00000000002, 3.8985657434, 78378.3925308913],
    [0.00000000003, 4.90084849261, 104355.73771913828],
    [0.00000000002, 2.45748414015, 26081.03341205689],
    [0.00000000002, 2.90684371055, 77197.45776501608],
    [0.00000000002, 3.27787980454, 365230.88779952226],
    [0.00000000002, 2.96609297657, 78690.55143308209],
    [0.00000000003, 5.20911364004, 52815.9473869459],
    [0.00000000002, 3.65607552967, 25448.2496727437],
    [0.00000000003, 0.46560289429, 77837.35505133009],
    [0.00000000002, 0.51377942249, 104371.52614468009],
    [0.00000000002, 1.04438989611, 25028.27739390149],
    [0.00000000002, 2.95995089299, 11322.9079157879],
    [0.00000000002, 2.29166292494, 77211.68485901768],
    [0.00000000002, 3.65747965646, 105307.45612538888],
    [0.00000000002, 3.59068071614, 78050.6541467681],
    [0.00000000002, 0.0983719617, 27043.2590656993],
    [0.00000000002, 4.33096627724, 104344.74283677948],
    [0.00000000002, 5.54465700187, 46514.23041651269],
    [0.00000000002, 4.94013298829, 77154.08705514569],
    [0.00000000002, 3.18110797568, 25451.1506870335],
    [0.00000000002, 2.48251705553, 26725.1432310819],
    [0.00000000002, 2.5217904219, 131499.1414555437],
    [0.00000000002, 6.07056602539, 61279.9570947495],
    [0.00000000002, 1.27106707156, 89586.6173405105],
    [0.00000000002, 1.28866377354, 30639.61282114949],
    [0.00000000002, 1.72917997527, 97581.14578253469],
    [0.00000000002, 1.4334092672, 78149.51395352086],
    [0.00000000002, 4.01850243495, 7238.4317741165],
    [0.00000000002, 5.54249111609, 426.3543733925],
    [0.00000000002, 0.49218153901, 107794.43132874569],
    [0.00000000002, 0.34191520237, 47623.60896860609],
    [0.00000000002, 5.99315014021, 104565.15547921829],
    [0.00000000002, 1.99101623607, 44295.9609472929],
    [0.00000000002, 5.47567807736, 18093.6185170335],
    [0.00000000002, 5.22941762292, 10213.0417287275],
    [0.00000000002, 3.76589759239, 104358.96993078108],
    [0.00000000002, 3.44277374163, 104347.97504842229],
    [0.00000000002, 3.46735728702, 134991.71302241329],
    [0.00000000002, 5.38147823295, 129910.06856025988],
    [0.00000000002, 1.91253822385, 57836.89451481709],
    [0.00000000002, 3.81440405932, 25557.96835899609],
    [0.00000000002, 1.41016954122, 54294.81396101029],
    [0.00000000002, 3.48149032535, 102762.78348849648],
    [0.00000000001, 1.23200675306, 7238.9194090835],
    [0.00000000002, 4.28600144274, 25934.3681485729],
    [0.00000000001, 1.40803647408, 151975.7091698699],
    [0.00000000002, 4.52450590998, 26241.9257695425],
    [0.00000000001, 1.50678411527, 131549.1380774479],
    [0.00000000001, 1.06085484841, 23968.89546371229],
    [0.00000000002, 2.9537911073, 25021.6514818677],
    [0.00000000002, 5.72041106584, 27154.6424362477],
    [0.00000000001, 2.16358753423, 181556.1838783137],
    [0.00000000001, 0.24053830744, 27140.41534224609],
    [0.00000000001, 1.76435464195, 149.8070146181],
    [0.00000000001, 3.46637889336, 50586.48957038109],
    [0.00000000001, 4.03245836538, 85502.6288338061],
    [0.00000000001, 4.69456883146, 1052.51220067191],
    [0.00000000001, 1.693005255, 84547.0290921975],
    [0.00000000001, 3.42418885871, 41962.27691945389],
    [0.00000000002, 1.10596292069, 1066.7392946735],
    [0.00000000001, 4.90928501927, 33326.33491569069],
    [0.00000000001, 5.93281924072, 103285.36090659029],
    [0.00000000001, 0.91877297183, 55504.18575691209],
    [0.00000000001, 6.04736307912, 117873.60782537168],
    [0.00000000001, 2.53958781081, 25035.8785758693],
    [0.00000000001, 4.09517185988, 58946.27306691049],
    [0.00000000001, 0.11578152669, 188276.8978576551],
    [0.00000000001, 1.73884599121, 49842.85370775989],
    [0.00000000001, 4.77533799776, 29428.7593857575],
    [0.00000000001, 5.22199381468, 146314.3771207177],
    [0.00000000001, 2.12230022464, 119117.0954270501],
    [0.00000000001, 2.86720953628, 39629.56816154889],
    [0.00000000001, 2.74763511093, 12546.72575656651],
    [0.00000000001, 0.25887140846, 64607.60511606269],
    [0.00000000001, 5.22258225356, 23868.9022199039],
    [0.00000000001, 4.58859350492, 48847.9144443517],
    [0.00000000001, 1.5109909811, 260878.78759825832],
    [0.00000000001, 3.51708181436, 25620.1819687033],
    [0.00000000001, 0.18832551491, 98068.78053378889],
    [0.00000000001, 0.48744281934, 22747.5345323579],
    [0.00000000001, 5.2936976744, 26556.11194941211],
    [0.00000000001, 5.89974555271, 85034.66384345168],
    [0.00000000001, 5.40405552306, 5327.7199258663],
    [0.00000000001, 3.99805833912, 63498.22656396929],
    [0.00000000001, 0.48047428009, 26300.95841952869],
    [0.00000000001, 0.36034529603, 105940.92927906409],
    [0.00000000001, 2.4893642854, 65831.9105918083],
    [0.00000000001, 2.46490999297, 79372.84415933248],
    [0.00000000001, 3.19576682217, 7.3573644843],
    [0.00000000001, 0.86957384492, 53399.86794141051],
    [0.00000000001, 3.826361063, 80597.1496350781],
    [0.00000000001, 3.10426657434, 49527.59527515889],
    [0.00000000001, 0.58848037656, 36300.94487030169],
    [0.00000000001, 1.70956045888, 116918.00808376308],
    [0.00000000001, 4.85073507517, 26080.54577708989],
    [0.00000000001, 3.44422946655, 60056.13925397089],
    [0.00000000001, 4.81916140005, 10022.0810975829],
    [0.00000000001, 5.11488921531, 51123.7817174435],
    [0.00000000001, 0.47588667079, 51645.87150057029],
    [0.00000000001, 1.41817736905, 76.50988875911],
    [0.00000000001, 0.99594891808, 106570.61348796709],
    [0.00000000001, 0.28396033479, 25021.16384690069],
    [0.00000000001, 1.51089793343, 15874.37377787969],
    [0.00000000001, 0.30377336401, 86144.04239554508],
    [0.00000000001, 3.39681294015, 52644.0150909863],
    [0.00000000001, 5.97495759877, 26094.77551795771],
    [0.00000000001, 2.83507136702, 26081.51840015769],
    [0.00000000001, 5.89040270497, 6.86972951729],
    [0.00000000001, 0.29019267678, 16703.3059509825],
    [0.00000000001, 5.32811862019, 35472.9879671329],
    [0.00000000001, 0.32321972304, 42154.2128205325],
    [0.00000000001, 4.39149562944, 77410.75686045409],
    [0.00000000001, 3.51650331906, 103925.25819290428],
    [0.00000000001, 2.00607418956, 52329.8289111167],
    [0.00000000001, 3.10569882865, 6681.46867088311],
    [0.00000000001, 0.56719469804, 6770.9544187291],
    [0.00000000001, 4.66201946613, 955.8435590921],
    [0.00000000001, 0.75784126065, 51109.55462344189],
    [0.00000000001, 1.25573296054, 29530.2342690561],
    [0.00000000001, 1.77919762464, 26067.9895631909],
    [0.00000000001, 4.03762558727, 25447.76203777669],
    [0.00000000001, 5.95598082912, 52705.25343075949],
    [0.00000000001, 1.01747250713, 33967.74847742969],
    [0.00000000001, 0.01664299877, 25035.39094090229],
    [0.00000000001, 6.20560095721, 26107.32908499049],
    [0.00000000001, 0.9357881532, 23969.3830986793],
    [0.00000000001, 2.52616943216, 19316.9487228451],
    [0.00000000001, 5.098967445, 26091.5406594487],
    [0.00000000001, 2.39439324238, 53131.16220727349],
    [0.00000000001, 2.74115190658, 95247.94938966268],
    [0.00000000001, 5.36396008776, 103299.58800059189],
    [0.00000000001, 4.59387367112, 26094.77287109149],
    [0.00000000001, 3.12740178962, 102233.09252340188],
    [0.00000000001, 2.15814286033, 25668.17468021549],
    [0.0, 6.02426301935, 12565.9078824993],
    [0.0, 5.08027895309, 54394.31956985169],
    [0.0, 2.97863205244, 111122.56698502589],
    [0.00000000001, 3.29290475293, 12432.2864678813],
    [0.00000000001, 4.11678654325, 115674.52048208468],
    [0.0, 1.52900740701, 25234.46294233869],
    [0.00000000001, 0.81921278001, 25661.06113321469],
    [0.00000000001, 1.94160256445, 39609.41076568209],
    [0.0, 4.43222686144, 45892.48661567349],
    [0.0, 5.52190845642, 77830.24150432929],
    [0.0, 5.87054542331, 116783.89903417809],
    [0.0, 0.7372346585, 28420.8557169627],
    [0.0, 1.91678340872, 103241.99019671988],
    [0.0, 0.75824711372, 52026.4869034973],
    [0.0, 1.7398337388, 19804.5834740993],
    [0.00000000001, 2.85651249975, 26083.7779887327],
    [0.0, 2.54986446702, 53242.5455778219],
    [0.0, 4.12464845193, 1588.82907780029],
    [0.0, 4.10463489089, 51219.96272405629],
    [0.0, 5.49428153801, 157637.04121902207],
    [0.0, 2.31218688576, 72602.13355808688],
    [0.0, 4.67530659291, 83924.79765639128],
    [0.0, 4.56610835896, 130420.0897644547],
    [0.0, 5.2510287113, 25668.6623151825],
    [0.0, 1.26830048676, 3340.8562441833],
    [0.0, 1.0280103443, 77204.08367704989],
    [0.0, 3.83991637789, 207594.0903979837],
    [0.0, 2.19144576095, 419.72846135871],
    [0.0, 5.6274719731, 32370.73517408209],
    [0.0, 1.99592158964, 78903.8505285201],
    [0.0, 0.0654938762, 44936.88687406489],
    [0.0, 4.5506725427, 286966.6907398325],
];

const X3: &[Term] = &[
    [0.0000018066, 1.53524873089, 0.2438174835],
    [0.00000056109, 1.50368825372, 52176.0501006319],
    [0.00000023909, 5.09285389011, 78263.95324220609],
    [0.00000011317, 2.22514154728, 104351.8563837803],
    [0.00000011202, 6.20552374893, 26088.1469590577],
    [0.00000007321, 1.49034347852, 26087.65932409069],
    [0.00000005011, 5.45015928644, 130439.75952535449],
    [0.00000002025, 2.30601224164, 156527.6626669287],
    [0.00000001152, 0.12743555397, 52175.56246566489],
    [0.00000000763, 5.40668920792, 182615.56580850287],
    [0.00000000387, 3.30772457389, 78263.46560723908],
    [0.00000000274, 2.20509049018, 208703.46895007708],
    [0.00000000112, 0.07801111545, 104351.36874881329],
    [0.00000000095, 5.27592058522, 234791.37209165128],
    [0.00000000037, 4.5090010529, 24978.7684069643],
    [0.00000000034, 4.28000177876, 27197.5255111511],
    [0.00000000032, 2.05675254224, 260879.27523322543],
    [0.00000000024, 2.45956768858, 51066.6715485385],
    [0.00000000032, 3.14716159333, 130439.27189038748],
    [0.00000000013, 5.72061024737, 77154.57469011268],
    [0.0000000001, 5.1145420654, 286967.1783747996],
    [0.00000000013, 0.11908599274, 53285.4286527253],
    [0.0000000001, 6.24570451816, 156527.17503196167],
    [0.00000000006, 4.82972887929, 1109.1347346099],
    [0.00000000007, 2.99175820133, 1059.6257476727],
    [0.00000000006, 1.9376777976, 20426.8149099055],
    [0.00000000006, 2.56259446748, 103242.47783168689],
    [0.00000000004, 0.5754051796, 31749.4790082099],
    [0.00000000004, 2.8930604258, 79373.33179429949],
    [0.00000000003, 1.89223297598, 313055.08151637384],
    [0.00000000003, 0.7968869621, 4552.1973145423],
    [0.00000000003, 3.08934162665, 182615.07817353585],
    [0.00000000003, 5.67790423166, 46514.7180514797],
    [0.00000000003, 1.82353994272, 21536.1934619989],
    [0.00000000002, 0.08756125776, 27147.5288892469],
    [0.00000000002, 3.96079675679, 1589.3167127673],
    [0.00000000002, 0.44816937719, 25132.5472174491],
    [0.00000000002, 5.80684121758, 14765.48286075331],
    [0.00000000002, 5.81670079373, 51116.6681704427],
    [0.00000000002, 5.64942685187, 129330.38097326108],
    [0.00000000002, 4.47727329739, 27197.03787618409],
    [0.00000000002, 2.76458797335, 26617.8379241523],
    [0.00000000002, 2.01320187052, 27043.7467006663],
    [0.00000000002, 6.24606226113, 25558.4559939631],
    [0.00000000002, 2.8848899035, 72602.62119305388],
    [0.00000000002, 1.80402690775, 26068.47719815791],
    [0.00000000002, 0.72272570426, 26107.81671995749],
    [0.00000000001, 5.1588041919, 26092.0282944157],
    [0.00000000001, 3.65122349702, 26084.2656236997],
    [0.00000000001, 3.47204379646, 24978.28077199729],
    [0.00000000001, 3.04599592472, 37410.8110573621],
    [0.00000000001, 0.31369621903, 30640.1004561165],
    [0.00000000001, 0.38979376906, 52705.7410657265],
    [0.00000000001, 5.01792294793, 51220.4503590233],
    [0.00000000001, 1.77400727778, 47624.0966035731],
    [0.00000000001, 6.21364236354, 208702.98131511008],
    [0.00000000001, 3.26982842147, 9104.1508116011],
    [0.00000000001, 6.10085930771, 98690.52433462809],
    [0.00000000001, 2.72881790021, 955.3559241251],
    [0.00000000001, 2.74013903592, 1109.6223695769],
    [0.00000000001, 2.00927169251, 19317.43635781211],
    [0.00000000001, 4.85871407247, 50586.97720534809],
    [0.00000000001, 5.37897907969, 12566.3955174663],
    [0.00000000001, 3.51249866668, 40853.3860023275],
    [0.00000000001, 3.74067924304, 53235.43203082109],
    [0.00000000001, 4.93930525226, 339142.984657948],
    [0.00000000001, 3.64879489376, 426.8420083595],
    [0.00000000001, 2.70663061614, 49957.2929964451],
    [0.00000000001, 4.05940415323, 26095.2605060585],
    [0.00000000001, 4.79523771458, 26081.03341205689],
    [0.00000000001, 4.56727257443, 23869.3898548709],
    [0.00000000001, 1.91316161387, 77308.35350059748],
    [0.00000000001, 5.81582715174, 105461.23493587368],
    [0.00000000001, 1.6782643661, 51646.3591355373],
    [0.00000000001, 2.42681597375, 155418.2841148353],
    [0.00000000001, 4.76066610745, 56728.0035976907],
    [0.00000000001, 3.51433188972, 53131.6498422405],
    [0.00000000001, 0.78156168692, 3442.81876244891],
    [0.00000000001, 3.65095652022, 78793.64420730069],
    [0.00000000001, 6.11514198482, 54394.80720481869],
    [0.00000000001, 0.70996446104, 79323.33517239528],
    [0.00000000001, 4.23955129941, 28306.90406324449],
    [0.00000000001, 0.04814737416, 45405.3394993863],
    [0.00000000001, 0.51322200896, 32858.8575603033],
    [0.0, 2.7056836664, 529.44714761109],
    [0.00000000001, 1.6591869465, 25028.7650288685],
    [0.0, 2.60942411635, 25874.8478636197],
    [0.00000000001, 1.76282246473, 22645.57201409229],
    [0.0, 2.31611990566, 640.1411037975],
    [0.0, 0.8935597927, 529.9347825781],
    [0.0, 6.2153176545, 26301.4460544957],
    [0.0, 3.72335130305, 83925.28529135829],
    [0.0, 1.81919615354, 82815.90673926489],
    [0.00000000001, 1.59769152646, 27677.2198543415],
    [0.0, 3.60725162991, 11322.42028082089],
    [0.0, 0.07486495309, 36301.4325052687],
    [0.0, 4.52680880738, 5661.5758666357],
    [0.0, 3.0746317053, 18849.4713674577],
    [0.0, 1.1048479051, 6770.46678376209],
    [0.0, 5.54664261005, 43072.1431065143],
    [0.0, 4.85626455897, 52156.38033973211],
    [0.0, 3.44123385645, 39609.8984006491],
    [0.0, 0.10298074121, 1052.51220067191],
    [0.0, 2.4227434094, 15874.8614128467],
    [0.0, 5.90990701318, 1066.7392946735],
    [0.0, 0.47240363594, 24499.0740637739],
    [0.0, 4.58808593083, 2119.00767786191],
    [0.0, 1.93271006548, 52179.9314359899],
    [0.0, 2.71699794579, 27043.2590656993],
    [0.0, 0.78321130217, 29530.7219040231],
    [0.0, 0.8739524412, 20426.32727493849],
    [0.0, 0.22412464998, 26514.7451499337],
    [0.0, 2.09910746178, 38654.2986590405],
    [0.0, 0.3778287213, 51066.18391357149],
    [0.0, 6.08588015961, 63498.71419893629],
    [0.0, 3.06180705468, 234790.88445668426],
    [0.0, 0.44816354598, 110013.18843293248],
    [0.0, 3.76757290021, 52195.71986153169],
    [0.0, 0.26388289924, 76674.88034692229],
    [0.0, 3.06411835882, 4551.7096795753],
    [0.0, 1.55289005756, 7.3573644843],
    [0.0, 5.69100090266, 33326.8225506577],
    [0.0, 4.84238249166, 2218.51328670329],
    [0.0, 5.21804461989, 51749.45190975589],
    [0.0, 0.07928724753, 7238.4317741165],
    [0.0, 0.4181980269, 52172.1687652739],
    [0.0, 1.0483533117, 53284.94101775829],
    [0.0, 0.31150101949, 66941.2891439017],
    [0.0, 1.30179196383, 52168.93655363109],
    [0.0, 3.59073128026, 58946.76070187749],
    [0.0, 5.69460606394, 30639.61282114949],
    [0.0, 3.0921135436, 62389.33564684289],
    [0.0, 3.64742441695, 105411.23831396949],
    [0.0, 2.56174511433, 103292.47445359109],
    [0.0, 3.50117859238, 23868.9022199039],
];

const X4: &[Term] = &[
    [0.00000043303, 2.70854317703, 26088.1469590577],
    [0.00000016746, 2.85109602051, 0.2438174835],
    [0.00000005097, 5.82035608585, 52176.0501006319],
    [0.0000000111, 2.85416500039, 78263.95324220609],
    [0.00000000968, 3.18837996543, 26087.65932409069],
    [0.00000000362, 0.10660634045, 104351.8563837803],
    [0.00000000161, 3.56341896847, 130439.75952535449],
    [0.00000000075, 0.55603774289, 156527.6626669287],
    [0.00000000076, 6.07252064875, 52175.56246566489],
    [0.00000000033, 3.72826875982, 182615.56580850287],
    [0.00000000014, 2.40716156772, 78263.46560723908],
    [0.00000000014, 0.56399976721, 208703.46895007708],
    [0.00000000005, 3.66056233199, 234791.37209165128],
    [0.00000000004, 5.13174489459, 104351.36874881329],
    [0.00000000002, 2.87490875788, 24978.7684069643],
    [0.00000000002, 5.8498934995, 27197.5255111511],
    [0.00000000002, 0.45146054812, 260879.27523322543],
    [0.00000000001, 1.74376603369, 130439.27189038748],
    [0.00000000001, 3.5163517869, 286967.1783747996],
    [0.00000000001, 0.06797049294, 51066.6715485385],
    [0.00000000001, 1.33488273309, 1059.6257476727],
    [0.00000000001, 0.19743580633, 20426.8149099055],
    [0.0, 4.73344633686, 156527.17503196167],
    [0.0, 3.03361722015, 53285.4286527253],
    [0.0, 0.28697199826, 1109.1347346099],
    [0.0, 2.12246327493, 31749.4790082099],
    [0.0, 3.62335756262, 77154.57469011268],
    [0.0, 5.27675905248, 4552.1973145423],
    [0.0, 0.97938730115, 51116.6681704427],
    [0.0, 2.90146638781, 5661.0882316687],
    [0.0, 3.37193339699, 21536.1934619989],
    [0.0, 1.47858093383, 182615.07817353585],
    [0.0, 3.30664239042, 46514.7180514797],
    [0.0, 2.38442876069, 1589.3167127673],
    [0.0, 4.43080795748, 27147.5288892469],
    [0.0, 5.33267823849, 25132.5472174491],
    [0.0, 0.89978296758, 26617.8379241523],
    [0.0, 4.07365069575, 14765.48286075331],
    [0.0, 1.63297628773, 25558.4559939631],
    [0.0, 3.35368510638, 27043.7467006663],
    [0.0, 4.71304947972, 529.9347825781],
    [0.0, 5.15326778299, 57837.3821497841],
];

const X5: &[Term] = &[
    [0.00000000414, 4.09017660105, 0.2438174835],
    [0.00000000327, 2.8389432998, 26088.1469590577],
    [0.00000000134, 4.51536199764, 52176.0501006319],
    [0.00000000046, 1.23267980717, 78263.95324220609],
    [0.00000000016, 4.45794773259, 104351.8563837803],
    [0.00000000007, 5.57199695746, 26087.65932409069],
    [0.00000000006, 1.55726840151, 130439.75952535449],
    [0.00000000003, 4.94192470876, 156527.6626669287],
    [0.00000000001, 1.93929522999, 182615.56580850287],
    [0.00000000001, 4.16271885947, 52175.56246566489],
    [0.00000000001, 5.10948519211, 208703.46895007708],
    [0.0, 0.99915185773, 78263.46560723908],
    [0.0, 1.90802069686, 234791.37209165128],
    [0.0, 3.92135630671, 104351.36874881329],
    [0.0, 1.30030594321, 24978.7684069643],
    [0.0, 0.96944549328, 27197.5255111511],
];

const Y0: &[Term] = &[
    [0.37749277893, 2.83179506899, 26088.1469590577],
    [0.11918926148, 2.9194812576, 0.2438174835],
    [0.03840153904, 5.8825454414, 52176.0501006319],
    [0.00585979278, 2.65010770289, 78263.95324220609],
    [0.00305833424, 3.67378306016, 26087.65932409069],
    [0.00105974941, 5.70085415459, 104351.8563837803],
    [0.00024906132, 0.55066770933, 52175.56246566489],
    [0.00021056065, 2.46841472315, 130439.75952535449],
    [0.00004441671, 5.51916065495, 156527.6626669287],
    [0.00003347442, 3.67952842081, 78263.46560723908],
    [0.00000976617, 2.28672075339, 182615.56580850287],
    [0.00000703903, 2.88960689088, 24978.7684069643],
    [0.00000640528, 5.91381352466, 27197.5255111511],
    [0.00000558149, 0.50510861725, 104351.36874881329],
    [0.00000447775, 1.40511442556, 1059.6257476727],
    [0.00000400281, 0.29865270517, 20426.8149099055],
    [0.00000283882, 2.22271091529, 31749.4790082099],
    [0.00000191007, 2.70458121832, 53285.4286527253],
    [0.00000181454, 0.23779467119, 1109.1347346099],
    [0.00000193895, 5.38872313263, 4552.1973145423],
    [0.00000221371, 5.33746575111, 208703.46895007708],
    [0.00000139001, 5.94193853313, 51066.6715485385],
    [0.00000183933, 2.7657993872, 5661.0882316687],
    [0.00000153303, 1.11372235868, 51116.6681704427],
    [0.00000104855, 3.60039284031, 130439.27189038748],
    [0.00000115202, 5.27930045344, 57837.3821497841],
    [0.00000090628, 4.97031050861, 529.9347825781],
    [0.00000075318, 4.50136079719, 27147.5288892469],
    [0.00000072957, 3.43332933363, 21536.1934619989],
    [0.00000074803, 3.35834807468, 46514.7180514797],
    [0.0000006871, 4.91618713593, 25132.5472174491],
    [0.00000083504, 1.60859812856, 10213.5293636945],
    [0.00000060985, 3.88048699951, 27043.7467006663],
    [0.00000057987, 4.13400021557, 14765.48286075331],
    [0.00000060953, 3.43164694662, 47624.0966035731],
    [0.00000053356, 0.72676419246, 26617.8379241523],
    [0.00000054964, 3.74064645856, 12566.3955174663],
    [0.00000047881, 5.75865881516, 79373.33179429949],
    [0.00000051263, 1.96665333979, 426.8420083595],
    [0.00000051361, 2.10502555376, 234791.37209165128],
    [0.00000050374, 2.03207321104, 25558.4559939631],
    [0.00000048449, 1.94914263411, 1589.3167127673],
    [0.00000048867, 4.16469048525, 77204.5713120169],
    [0.00000034739, 4.11430856351, 51646.3591355373],
    [0.00000032851, 4.56963272977, 955.3559241251],
    [0.00000044998, 0.91167682267, 41962.7645544209],
    [0.00000031618, 4.66914248946, 37410.8110573621],
    [0.00000028634, 5.42748718604, 30640.1004561165],
    [0.0000003148, 2.70995810641, 77154.57469011268],
    [0.00000032102, 2.04798101755, 83925.28529135829],
    [0.0000002767, 5.06128264443, 39609.8984006491],
    [0.00000026872, 4.68921320015, 36301.4325052687],
    [0.00000023054, 0.71973276708, 53131.6498422405],
    [0.00000026193, 5.26902812193, 11322.42028082089],
    [0.00000021235, 0.40309333526, 156527.17503196167],
    [0.00000026946, 0.1917296093, 6283.3196674749],
    [0.00000020875, 4.09807664196, 15874.8614128467],
    [0.00000016454, 0.12816102587, 72602.62119305388],
    [0.00000016101, 1.6554044048, 9104.1508116011],
    [0.00000022241, 5.60722857321, 13521.50762410789],
    [0.00000021188, 0.19996828748, 73711.99974514729],
    [0.00000015123, 1.24465016017, 18849.4713674577],
    [0.00000017255, 0.2410738627, 27197.03787618409],
    [0.00000017287, 0.55372068563, 51749.45190975589],
    [0.00000013862, 1.29323907537, 53235.43203082109],
    [0.00000015239, 1.96671567039, 7238.4317741165],
    [0.00000016863, 0.57148727289, 50586.97720534809],
    [0.00000013546, 3.64906926506, 52705.7410657265],
    [0.00000013134, 4.21391538202, 25028.7650288685],
    [0.00000014145, 1.46555737893, 63498.71419893629],
    [0.00000013081, 0.20810129185, 26068.47719815791],
    [0.00000013058, 2.31384723416, 26107.81671995749],
    [0.00000013609, 1.68775421835, 51220.4503590233],
    [0.00000013539, 0.9321433214, 103292.47445359109],
    [0.00000012138, 5.15577059992, 260879.27523322543],
    [0.00000011433, 0.41025670835, 19317.43635781211],
    [0.00000010174, 0.82322453273, 77734.26227711148],
    [0.00000012016, 3.96439926693, 68050.66769599509],
    [0.00000012094, 2.52834929119, 105461.23493587368],
    [0.00000009215, 0.91145814574, 40853.3860023275],
    [0.00000009157, 1.25590715075, 33326.8225506577],
    [0.00000009552, 0.53954398597, 38654.2986590405],
    [0.000000125, 2.32164805011, 45892.9742506405],
    [0.00000008978, 5.18856241237, 26084.2656236997],
    [0.00000008975, 3.61663563272, 26092.0282944157],
    [0.0000001216, 1.83585138946, 65697.80154222329],
    [0.0000000888, 5.05045852302, 26514.7451499337],
    [0.00000008892, 5.46009752557, 3442.81876244891],
    [0.00000008503, 5.09915668367, 110013.18843293248],
    [0.00000010244, 4.07406090643, 21535.70582703189],
    [0.00000008816, 3.29850433474, 32371.2228090491],
    [0.00000009705, 0.7357702042, 529.44714761109],
    [0.00000007663, 2.16404811803, 56728.0035976907],
    [0.00000007852, 5.36793581356, 5661.5758666357],
    [0.00000008166, 5.0402552136, 27677.2198543415],
    [0.00000007299, 2.72074453751, 6770.46678376209],
    [0.00000007437, 2.10814922209, 32858.8575603033],
    [0.00000007796, 2.76073375309, 31748.99137324289],
    [0.00000006786, 0.86898827574, 43072.1431065143],
    [0.00000007408, 2.97710007179, 23869.3898548709],
    [0.00000005938, 3.77513720036, 79219.55298381469],
    [0.00000007553, 5.76102373104, 103242.47783168689],
    [0.00000005988, 1.47338249847, 62389.33564684289],
    [0.00000006154, 4.42442839598, 59414.7256922319],
    [0.00000006213, 5.46384627852, 19805.0711090663],
    [0.00000006507, 5.77583424512, 213.5429129215],
    [0.00000006284, 3.34908254208, 22645.57201409229],
    [0.00000006068, 3.25197843754, 99799.90288672148],
    [0.00000006276, 1.17668731862, 640.1411037975],
    [0.00000006192, 5.82504003546, 28306.90406324449],
    [0.00000006081, 3.66198807267, 25874.8478636197],
    [0.00000004693, 1.4807426467, 16983.75232997309],
    [0.00000004527, 3.48220057078, 182615.07817353585],
    [0.00000005085, 5.05051010501, 26301.4460544957],
    [0.00000004658, 2.54088213723, 26095.2605060585],
    [0.00000005323, 3.72103089814, 24978.28077199729],
    [0.00000004497, 0.02524195316, 26081.03341205689],
    [0.00000005479, 3.60707059696, 76674.88034692229],
    [0.00000003898, 3.18081892914, 98690.52433462809],
    [0.00000005352, 3.60477090908, 77837.35505133009],
    [0.00000003694, 5.20175219531, 58946.76070187749],
    [0.00000003631, 3.98277710501, 129380.37759516528],
    [0.00000004821, 5.22008496092, 37410.32342239509],
    [0.00000003323, 0.38355389097, 78793.64420730069],
    [0.00000003932, 5.47485976543, 29530.7219040231],
    [0.00000004022, 2.4929391373, 2119.00767786191],
    [0.00000003208, 1.18605815284, 25557.96835899609],
    [0.00000003611, 4.88816178501, 91785.70468379749],
    [0.00000003062, 4.35403926224, 79323.33517239528],
    [0.0000000348, 5.37504374301, 71980.8773922147],
    [0.00000003093, 0.73248333106, 94138.57083756929],
    [0.00000003172, 4.57251658041, 27043.2590656993],
    [0.00000002912, 1.92332998999, 286967.1783747996],
    [0.00000003746, 4.51336113078, 89586.6173405105],
    [0.0000000287, 3.94317758843, 69160.04624808849],
    [0.0000000273, 4.31583707063, 44937.3745090319],
    [0.00000002725, 3.85377970873, 103822.16541868569],
    [0.00000003214, 0.16060042614, 2218.51328670329],
    [0.0000000266, 3.25887021687, 52156.38033973211],
    [0.00000003257, 1.14198557197, 25934.3681485729],
    [0.0000000262, 1.06710403438, 20426.32727493849],
    [0.00000003227, 1.38048915969, 26241.9257695425],
    [0.00000003086, 4.73969429884, 77308.35350059748],
    [0.00000003099, 5.58109262188, 131549.1380774479],
    [0.00000002731, 4.90353573524, 149.8070146181],
    [0.00000002486, 1.55056807904, 1052.51220067191],
    [0.00000003167, 1.96024135338, 33326.33491569069],
    [0.0000000268, 5.36534815866, 52195.71986153169],
    [0.00000002231, 1.8671268398, 136101.0915745067],
    [0.00000002653, 0.11236418844, 7.3573644843],
    [0.00000002074, 3.39236434641, 48733.47515566649],
    [0.00000001974, 3.5988255621, 64742.2018006147],
    [0.00000002064, 1.78573813736, 51116.18053547569],
    [0.00000002533, 4.4495196094, 1066.7392946735],
    [0.00000001949, 0.1163454837, 58459.1259506233],
    [0.0000000201, 0.87459613624, 16984.2399649401],
    [0.00000001876, 5.20487934678, 82815.90673926489],
    [0.00000001832, 0.38381879945, 52179.9314359899],
    [0.00000002306, 2.63023850427, 54394.80720481869],
    [0.00000001837, 3.96249421836, 66941.2891439017],
    [0.00000001783, 0.3730728557, 25620.1819687033],
    [0.00000001826, 1.95614381567, 52172.1687652739],
    [0.00000001791, 3.75150085341, 25661.5487681817],
    [0.00000002126, 1.34366019415, 51536.15281431789],
    [0.00000001714, 2.14968206427, 26556.11194941211],
    [0.00000001972, 3.46789993631, 45405.3394993863],
    [0.00000001711, 2.68399636879, 32858.36992533629],
    [0.00000001643, 1.83203729093, 52602.6482915079],
    [0.00000001665, 2.26005496586, 5327.7199258663],
    [0.0000000193, 4.21706155195, 13656.10430865991],
    [0.00000001655, 0.02018823486, 125887.80602829569],
    [0.00000001554, 1.8293970137, 13521.9952590749],
    [0.00000001517, 1.82763021291, 53765.1229959157],
    [0.0000000187, 2.52871717392, 129330.38097326108],
    [0.00000001705, 1.43301700747, 43071.65547154729],
    [0.00000001683, 2.75504809483, 52168.93655363109],
    [0.00000001449, 4.53368571731, 88477.23878841709],
    [0.00000001466, 3.70132103086, 24499.0740637739],
    [0.00000001655, 4.55736013213, 76.50988875911],
    [0.00000001539, 0.5509732074, 105307.45612538888],
    [0.00000001542, 0.39515897687, 102762.78348849648],
    [0.000000014, 5.97424163846, 26081.51840015769],
    [0.000000014, 2.83094248939, 26094.77551795771],
    [0.00000001415, 6.0302400868, 49957.2929964451],
    [0.00000001545, 1.1738088445, 85502.6288338061],
    [0.00000001259, 2.49869507757, 51962.7510051939],
    [0.00000001464, 0.37249136511, 103925.25819290428],
    [0.00000001265, 4.66607647315, 35192.0539531753],
    [0.00000001563, 6.24487877351, 6681.46867088311],
    [0.00000001517, 5.7123788259, 213.0552779545],
    [0.00000001171, 6.01640449002, 57836.89451481709],
    [0.00000001547, 1.8661970485, 52389.3491960699],
    [0.00000001423, 0.03012497835, 50057.2862402535],
    [0.00000001238, 5.55628734215, 52183.1636476327],
    [0.0000000107, 4.25732715878, 26728.0442453717],
    [0.0000000102, 5.20453548111, 12431.79883291429],
    [0.00000000965, 0.75029404016, 155468.28073673949],
    [0.00000001018, 0.65795794031, 24498.58642880689],
    [0.00000000994, 1.65652991676, 117873.60782537168],
    [0.00000001002, 0.27317864857, 208702.98131511008],
    [0.00000001214, 4.15542472749, 25661.06113321469],
    [0.00000000958, 6.23240896197, 124778.42747620228],
    [0.00000000893, 1.95641235916, 85034.66384345168],
    [0.00000000875, 0.15313552239, 74821.37829724069],
    [0.00000000871, 1.8501783351, 1059.1381127057],
    [0.0000000091, 2.14250029739, 98068.78053378889],
    [0.00000000827, 4.01703921795, 22645.08437912529],
    [0.00000000829, 3.41829988722, 104881.54734887488],
    [0.0000000087, 0.60198611419, 51066.18391357149],
    [0.00000000978, 4.58656747537, 38520.1896094555],
    [0.00000000915, 2.91341983071, 6.86972951729],
    [0.00000000855, 0.96267173742, 51123.7817174435],
    [0.00000000795, 3.78227948828, 120226.47397914348],
    [0.00000000778, 4.69135126506, 11322.9079157879],
    [0.00000000913, 3.89740262984, 52026.4869034973],
    [0.0000000093, 1.27443982259, 115674.52048208468],
    [0.00000000932, 2.23433073748, 55618.6250455973],
    [0.00000000707, 4.97407500954, 313055.08151637384],
    [0.00000000803, 2.35027685221, 157637.04121902207],
    [0.0000000073, 3.77427452793, 53284.94101775829],
    [0.00000000725, 1.12701074857, 105411.23831396949],
    [0.00000000788, 4.40761141586, 3340.8562441833],
    [0.00000000867, 4.35296523561, 51109.55462344189],
    [0.00000000718, 0.6108509178, 129910.06856025988],
    [0.00000000688, 5.33062177858, 419.72846135871],
    [0.0000000071, 0.69656198994, 95247.94938966268],
    [0.00000000694, 0.6921696145, 26617.35028918529],
    [0.00000000621, 2.81767179045, 4551.7096795753],
    [0.00000000661, 5.92198588119, 10213.0417287275],
    [0.00000000674, 5.58162526148, 28206.9108194361],
    [0.00000000609, 0.02645166365, 78244.2834813063],
    [0.00000000661, 4.19316030438, 52022.2712901471],
    [0.00000000741, 1.5079591452, 103396.25664217169],
    [0.00000000585, 4.91842789278, 162188.99471608087],
    [0.00000000599, 0.26652159243, 46848.5739922491],
    [0.00000000634, 5.63013895989, 39609.41076568209],
    [0.00000000731, 1.84936364859, 433.9555553603],
    [0.00000000591, 1.08868730454, 71025.27765060609],
    [0.00000000576, 4.10239875091, 47623.60896860609],
    [0.00000000545, 3.9206476691, 48732.98752069949],
    [0.00000000528, 3.25755205747, 23754.95056618569],
    [0.00000000531, 1.51927796885, 41962.27691945389],
    [0.00000000525, 0.6565795054, 10022.0810975829],
    [0.00000000578, 5.67944788678, 80482.71034639288],
    [0.00000000675, 4.42923882594, 52329.8289111167],
    [0.00000000664, 4.39586206751, 77624.05595589208],
    [0.00000000541, 4.50825185806, 6282.83203250789],
    [0.00000000639, 2.57562729428, 45494.82524723229],
    [0.00000000594, 1.74048603817, 7994.77225950771],
    [0.00000000467, 3.18640247451, 84547.0290921975],
    [0.00000000552, 4.24369907572, 52099.7840293563],
    [0.0000000049, 1.39410440209, 64608.09275102969],
    [0.00000000553, 0.826631104, 1692.40948698591],
    [0.00000000456, 0.37337128477, 90830.10494218889],
    [0.0000000047, 1.72250117653, 26237.7101561923],
    [0.00000000501, 5.75878971797, 25132.0595824821],
    [0.00000000615, 2.13316170849, 78283.62300310588],
    [0.00000000441, 4.69790158258, 27140.41534224609],
    [0.00000000445, 3.07156557764, 151975.7091698699],
    [0.00000000437, 0.95616885323, 20760.1832157079],
    [0.00000000472, 5.57949973231, 155418.2841148353],
    [0.00000000428, 4.96656096346, 77204.08367704989],
    [0.00000000469, 1.97026697646, 108903.8098808391],
    [0.00000000478, 2.05637713133, 63498.22656396929],
    [0.00000000448, 5.75669088007, 78256.83969520529],
    [0.00000000591, 0.35948760681, 853.4401992355],
    [0.00000000438, 4.57721971918, 51645.87150057029],
    [0.0000000044, 0.13387750376, 28306.41642827749],
    [0.00000000413, 5.17208909967, 38519.70197448849],
    [0.00000000456, 0.44231533666, 26038.1503371535],
    [0.00000000456, 2.07975292935, 26138.1435809619],
    [0.0000000047, 2.6578110922, 58946.27306691049],
    [0.00000000434, 0.7441979438, 29428.7593857575],
    [0.00000000439, 5.54617295689, 2333.44021035551],
    [0.00000000406, 1.00123517971, 1582.2031657665],
    [0.00000000419, 3.46554019433, 128850.68663007069],
    [0.00000000403, 5.55657271431, 28421.3433519297],
    [0.00000000423, 5.90337303076, 50586.48957038109],
    [0.0000000042, 3.43444455433, 78267.83457756409],
    [0.00000000508, 5.53374236541, 26720.93069837089],
    [0.00000000445, 2.6610919938, 1109.6223695769],
    [0.00000000452, 4.25647147725, 25985.0541848391],
    [0.0000000044, 5.74038643901, 78050.6541467681],
    [0.00000000427, 1.26284550681, 27154.6424362477],
    [0.00000000422, 0.73601792678, 93029.19228547589],
    [0.00000000387, 1.92885240062, 22747.5345323579],
    [0.00000000451, 4.61446843236, 26191.23973327629],
    [0.00000000525, 3.37057650618, 25455.3632197445],
    [0.00000000439, 4.25286780683, 46514.23041651269],
    [0.0000000039, 3.42340819919, 130013.16133447849],
    [0.00000000364, 4.88702121021, 78690.55143308209],
    [0.00000000468, 3.04146774326, 76145.18938182769],
    [0.00000000361, 1.30085103028, 114565.14192999128],
    [0.00000000354, 5.19811092004, 52644.0150909863],
    [0.00000000418, 5.00690657163, 78260.07190684808],
    [0.00000000366, 2.14542297373, 25028.27739390149],
    [0.00000000394, 4.92599580786, 78477.2523376441],
    [0.00000000337, 4.88605522032, 79853.02613748988],
    [0.00000000356, 3.76575150987, 633.0275567967],
    [0.00000000427, 5.87777060793, 19804.5834740993],
    [0.0000000036, 4.50952146319, 48835.43767393209],
    [0.00000000431, 0.05038435146, 30639.61282114949],
    [0.00000000336, 0.49943786696, 18208.05780571871],
    [0.00000000317, 2.79783111172, 76045.1961380193],
    [0.00000000403, 3.61003449042, 131395.3592669631],
    [0.000000003, 3.06549658713, 25973.70767037247],
    [0.00000000365, 3.99788805051, 25565.5695409639],
    [0.00000000417, 0.23545014867, 71493.2426409605],
    [0.00000000298, 5.73633616578, 26202.58624774291],
    [0.00000000411, 4.96911720848, 1596.43025976811],
    [0.00000000286, 5.88170536088, 52182.67865953191],
    [0.00000000304, 3.41185962602, 51708.08511027749],
    [0.00000000288, 1.37917320218, 26164.4130303333],
    [0.00000000326, 4.77493319595, 26610.72437715149],
    [0.00000000375, 2.00750267367, 26162.928557625],
    [0.00000000268, 4.70687038628, 143961.51096694588],
    [0.00000000367, 4.20390802587, 111590.53197538029],
    [0.00000000264, 3.36238088617, 72936.4771338233],
    [0.00000000301, 1.01728716251, 224.5886131854],
    [0.00000000286, 0.96880689193, 46848.0863572821],
    [0.00000000257, 3.80096482898, 181556.1838783137],
    [0.00000000352, 0.48255743874, 26013.3653604904],
    [0.00000000274, 5.81956733021, 956.53297345411],
    [0.00000000253, 4.93056899504, 75.0254160508],
    [0.00000000256, 1.10512464961, 537.0483295789],
    [0.00000000245, 3.26928135038, 51756.5654567567],
    [0.00000000286, 2.73949837375, 52169.42154173189],
    [0.00000000326, 0.00381222715, 25771.7550894011],
    [0.00000000252, 5.36725270563, 25668.6623151825],
    [0.00000000239, 1.88156493524, 42154.2128205325],
    [0.00000000324, 2.52294776653, 26404.5388287143],
    [0.00000000285, 6.14793784305, 1162.7185218913],
    [0.00000000237, 5.19203538966, 124156.68367536309],
    [0.00000000271, 3.04131804133, 15874.37377787969],
    [0.00000000307, 2.31415827156, 78271.06678920689],
    [0.00000000323, 3.00259946219, 19406.43447069109],
    [0.00000000245, 5.02045917872, 111122.56698502589],
    [0.00000000229, 5.15166243945, 36300.94487030169],
    [0.00000000243, 4.26179828093, 7238.9194090835],
    [0.00000000242, 1.18373210037, 51748.96427478889],
    [0.00000000275, 4.01647026193, 77211.68485901768],
    [0.00000000234, 2.92710924584, 83924.79765639128],
    [0.00000000279, 1.12090122634, 77197.45776501608],
    [0.0000000026, 2.9117743895, 32769.3718124573],
    [0.00000000222, 3.18512792848, 100909.28143881488],
    [0.00000000279, 3.09797269121, 26507.63160293289],
    [0.00000000299, 3.03086575636, 2648.6986429565],
    [0.00000000213, 5.24729841378, 1479.11039154791],
    [0.00000000221, 4.03293449116, 102.84895673509],
    [0.00000000231, 4.31940320133, 141762.4236236589],
    [0.00000000208, 0.53989181963, 146314.3771207177],
    [0.00000000236, 4.88594462204, 14764.9952257863],
    [0.00000000219, 5.60242546056, 110.45013870291],
    [0.00000000241, 3.00055987343, 150866.3306177765],
    [0.0000000021, 5.40322983591, 183724.9443605963],
    [0.0000000028, 0.66543647361, 78114.39004507149],
    [0.00000000211, 0.17674723492, 130969.45049044909],
    [0.00000000244, 5.94927988906, 11610.7957758577],
    [0.00000000265, 0.9889366649, 39744.0074502341],
    [0.000000002, 2.15844889143, 16065.82204399129],
    [0.00000000222, 5.27780086013, 81706.5281871715],
    [0.00000000197, 1.03744786641, 52815.9473869459],
    [0.00000000197, 4.45583276555, 12565.9078824993],
    [0.00000000241, 5.45668008692, 27147.04125427989],
    [0.00000000205, 2.01894158165, 33968.23611239669],
    [0.00000000248, 5.59907777274, 71582.72838880648],
    [0.00000000246, 0.67064557518, 51742.33836275509],
    [0.00000000203, 0.7745102607, 25881.9614106205],
    [0.00000000202, 4.54831491675, 25448.2496727437],
    [0.00000000228, 3.34387624216, 234790.88445668426],
    [0.00000000198, 1.71260487848, 26294.33250749489],
    [0.00000000231, 0.78401706031, 44181.52165860769],
    [0.00000000185, 5.15550823271, 64607.60511606269],
    [0.00000000226, 2.64165383084, 7879.84533585549],
    [0.00000000176, 3.73240626851, 77154.08705514569],
    [0.00000000179, 3.5391395686, 14477.1073657165],
    [0.00000000195, 5.08298233604, 59414.23805726489],
    [0.00000000207, 4.24194657171, 1376.0176173293],
    [0.00000000174, 1.73934628427, 339142.984657948],
    [0.00000000174, 5.68665306442, 51543.2663613187],
    [0.00000000184, 4.5568850211, 129484.15978374588],
    [0.00000000173, 6.20260804596, 23968.89546371229],
    [0.00000000207, 0.17517194401, 20760.6708506749],
    [0.00000000166, 0.73482223187, 79372.84415933248],
    [0.00000000185, 1.16294236415, 103711.95909746629],
    [0.00000000161, 0.99358007086, 73711.51211018028],
    [0.00000000194, 1.69156637131, 50483.8844311295],
    [0.0000000022, 1.40610479581, 69159.55861312148],
    [0.00000000191, 3.65637031484, 155997.9717018341],
    [0.00000000216, 4.60747679624, 53131.16220727349],
    [0.00000000156, 2.45974681457, 106570.61348796709],
    [0.00000000181, 1.41036114643, 18093.13088206649],
    [0.00000000152, 0.95845975049, 78110.17443172129],
    [0.00000000149, 2.99675052546, 45892.48661567349],
    [0.00000000182, 3.74672593763, 121335.85253123689],
    [0.00000000155, 1.68611064922, 188276.8978576551],
    [0.00000000178, 4.17805278254, 131499.1414555437],
    [0.00000000166, 2.18208828557, 468.20880783791],
    [0.00000000157, 1.37406612212, 61279.9570947495],
    [0.00000000203, 2.15909999017, 51322.85371887989],
    [0.0000000019, 0.3091908137, 25874.36022865269],
    [0.00000000142, 1.51656559474, 50594.09075234889],
    [0.00000000175, 3.620017202, 26624.9514711531],
    [0.00000000148, 3.07498569808, 104332.1866228805],
    [0.00000000153, 3.71257893953, 52101.26850206459],
    [0.00000000164, 3.90190440252, 74820.89066227368],
    [0.00000000158, 1.19350301362, 78417.73205269089],
    [0.0000000014, 0.89912686582, 52279.14287485049],
    [0.00000000163, 5.63286881634, 25780.58933808811],
    [0.0000000016, 3.16772159097, 26395.7045800273],
    [0.00000000132, 3.07363434632, 22760.01130277751],
    [0.00000000129, 0.10582004023, 54394.31956985169],
    [0.0000000015, 5.18178770285, 104371.52614468009],
    [0.00000000166, 5.3701534663, 522.8212355773],
    [0.00000000149, 2.52020201514, 23889.0596157707],
    [0.00000000125, 2.56126838362, 65697.31390725628],
    [0.00000000127, 2.35920317858, 54294.81396101029],
    [0.00000000136, 6.13995819179, 102233.09252340188],
    [0.0000000014, 2.25411762839, 52808.83383994509],
    [0.00000000171, 1.01179953646, 78187.68717093048],
    [0.00000000119, 6.12499272961, 178063.6123114441],
    [0.00000000121, 2.34497789442, 181506.18725640947],
    [0.0000000015, 1.3710010753, 13362.6935242827],
    [0.0000000016, 0.50398727524, 955.8435590921],
    [0.00000000122, 0.97167224102, 52072.9573264133],
    [0.00000000139, 4.14538916469, 97113.18079218028],
    [0.00000000116, 2.49897944668, 104344.74283677948],
    [0.00000000127, 4.93091662093, 26521.8586969345],
    [0.00000000113, 0.247289031, 154938.58977164488],
    [0.00000000116, 6.24971983447, 110634.93223377169],
    [0.0000000012, 3.16836542455, 23969.3830986793],
    [0.00000000117, 0.78253817148, 18093.6185170335],
    [0.00000000114, 5.52498204591, 25754.2910182883],
    [0.0000000015, 5.32072185109, 25551.34244696229],
    [0.00000000109, 3.57166541301, 40565.01050729069],
    [0.0000000011, 0.7918457443, 24176.9474758405],
    [0.00000000107, 4.83424409375, 68242.11596210669],
    [0.00000000112, 3.27382494684, 26422.0028998271],
    [0.00000000107, 4.40903077996, 90695.99589260388],
    [0.00000000104, 0.18580141979, 156101.06447605268],
    [0.00000000111, 3.42810291181, 116918.00808376308],
    [0.00000000121, 6.28088254389, 28287.2343023447],
    [0.00000000108, 1.36988749165, 44181.03402364069],
    [0.00000000102, 2.58046151243, 26198.3532802771],
    [0.00000000143, 3.83368380796, 50579.86365834729],
    [0.00000000108, 3.14844806883, 26107.32908499049],
    [0.00000000103, 5.73149554363, 29416.28261533789],
    [0.00000000102, 1.26920320545, 74923.34081550628],
    [0.00000000111, 1.57596233643, 51639.24558853649],
    [0.000000001, 3.85312326105, 25035.8785758693],
    [0.00000000097, 3.56740191654, 323.74923414091],
    [0.000000001, 1.69705145148, 104565.15547921829],
    [0.00000000099, 5.11526101592, 31415.6230674405],
    [0.0000000012, 5.01910336702, 134991.71302241329],
    [0.00000000131, 1.06382274034, 647.25465079831],
    [0.00000000128, 2.5593372831, 104138.55728834229],
    [0.0000000011, 4.87488188396, 24357.0246061251],
    [0.00000000105, 1.0513197996, 26067.9895631909],
    [0.00000000095, 4.10632947324, 52705.25343075949],
    [0.00000000105, 3.71934987002, 55516.6625273317],
    [0.00000000093, 3.49141182565, 52126.05347872769],
    [0.00000000092, 2.31943050291, 54509.2464935039],
    [0.00000000096, 1.9126505514, 743.23387801611],
    [0.00000000109, 5.90844457054, 632.5399218297],
    [0.0000000009, 1.71341920893, 27999.3464422749],
    [0.00000000094, 1.83646395516, 103291.98681862408],
    [0.00000000111, 2.83140360723, 40565.4981422577],
    [0.00000000101, 1.49775137503, 51951.70530492999],
    [0.00000000102, 0.199805704, 104355.73771913828],
    [0.00000000088, 2.55079662642, 1588.82907780029],
    [0.00000000102, 3.43450786393, 26941.3433408097],
    [0.00000000109, 5.12423170717, 60056.13925397089],
    [0.00000000093, 3.91123861975, 27780.31262856009],
    [0.00000000089, 4.72535332511, 68050.18006102808],
    [0.00000000106, 2.15819157914, 6770.9544187291],
    [0.00000000101, 5.08955449331, 52250.8316991992],
    [0.00000000086, 4.79490272689, 52325.61329776649],
    [0.00000000092, 4.35572616043, 140653.0450715655],
    [0.00000000107, 0.38434884214, 157483.26240853727],
    [0.00000000087, 0.6885910818, 25938.5837619231],
    [0.00000000094, 2.98031225005, 51219.76094466129],
    [0.00000000089, 3.67089011438, 36109.9842391571],
    [0.00000000093, 1.66575202299, 103.3365917021],
    [0.00000000098, 3.92942306643, 27819.2693119903],
    [0.00000000084, 1.50244162097, 53228.31848382029],
    [0.00000000087, 3.14637767899, 52065.84377941249],
    [0.00000000099, 3.29163755467, 97581.14578253469],
    [0.00000000105, 3.863263123, 70269.42480018188],
    [0.00000000083, 2.64246416261, 51219.96272405629],
    [0.00000000101, 5.08528632726, 52226.0467225361],
    [0.00000000087, 1.65472743108, 104778.45457465628],
    [0.00000000102, 4.59971787247, 12432.2864678813],
    [0.00000000082, 1.96514410059, 78731.91823256049],
    [0.00000000101, 3.78885420287, 119117.0954270501],
    [0.00000000108, 5.77504268406, 49527.59527515889],
    [0.00000000092, 3.01639809211, 51859.65823097529],
    [0.0000000008, 4.33221518102, 53242.5455778219],
    [0.00000000107, 4.90113452404, 25447.76203777669],
    [0.00000000088, 1.30079620909, 12725.20961729149],
    [0.00000000091, 5.49075472411, 26300.95841952869],
    [0.0000000008, 1.6555042343, 105940.92927906409],
    [0.00000000076, 5.84908430441, 102133.09927959349],
    [0.00000000079, 0.1237150889, 80482.22271142589],
    [0.00000000091, 2.66249978065, 51013.57539622409],
    [0.00000000094, 1.39522248869, 2222.1004520805],
    [0.00000000089, 0.94979154283, 137678.43511695447],
    [0.00000000075, 0.07329711774, 3327.89183879669],
    [0.00000000089, 2.43057395425, 1910.9556657337],
    [0.00000000098, 4.89673673453, 50056.79860528649],
    [0.00000000074, 6.13007861498, 25977.94063783829],
    [0.00000000089, 5.56505599077, 52492.4419702885],
    [0.00000000073, 3.56559697903, 50697.1835265675],
    [0.00000000102, 1.77223481993, 104347.97504842229],
    [0.00000000072, 1.47771204102, 170049.41410852008],
    [0.00000000078, 4.16301616898, 103285.36090659029],
    [0.00000000075, 6.2689733645, 52595.53474450709],
    [0.00000000074, 1.16312773108, 25021.6514818677],
    [0.00000000075, 0.08785923175, 77844.46859833089],
    [0.00000000078, 2.64612833915, 74.53778108379],
    [0.00000000094, 1.55832345623, 52698.62751872569],
    [0.00000000095, 1.28337020564, 25938.09612695609],
    [0.00000000087, 1.11118535241, 72602.13355808688],
    [0.0000000007, 4.10808217554, 27670.10630734069],
    [0.00000000076, 5.35798835757, 104358.96993078108],
    [0.00000000074, 3.71626517668, 25954.0379094727],
    [0.0000000007, 5.98641613952, 66653.40128383189],
    [0.00000000071, 2.40595691806, 24998.4381678641],
    [0.00000000073, 5.08664921507, 26222.2560086427],
    [0.00000000081, 6.12425664727, 8194.0315157251],
    [0.00000000066, 2.6470134718, 78270.58180110609],
    [0.00000000072, 2.95285797491, 426.3543733925],
    [0.00000000078, 3.71360449621, 104202.2931866457],
    [0.00000000066, 5.22374540666, 89586.12970554348],
    [0.00000000081, 6.08469300372, 26080.54577708989],
    [0.00000000068, 0.56774852198, 207644.08701988787],
    [0.00000000065, 4.30145540281, 12546.72575656651],
    [0.00000000074, 2.34912240985, 97670.63153038069],
    [0.00000000067, 1.25089965871, 2111.8941308611],
    [0.00000000079, 3.7164731951, 77830.24150432929],
    [0.00000000083, 5.35734577753, 522.3336006103],
    [0.00000000079, 2.22871999356, 25446.73339731871],
    [0.00000000063, 1.37131699662, 70268.93716521488],
    [0.00000000074, 4.4342566754, 95247.46175469569],
    [0.00000000085, 1.03066114675, 72935.98949885629],
    [0.00000000062, 1.93537775234, 150244.58681693728],
    [0.00000000081, 1.53102925511, 77733.77464214448],
    [0.00000000077, 5.87942788213, 316.6356871401],
    [0.00000000075, 2.6155098634, 33967.74847742969],
    [0.00000000071, 1.76514499411, 27684.3334013423],
    [0.00000000061, 2.80789864051, 846.3266522347],
    [0.00000000064, 0.11131885479, 27177.8557502513],
    [0.00000000073, 6.03174712424, 26083.7779887327],
    [0.00000000075, 0.28818227298, 26729.56052079669],
    [0.00000000071, 3.36506897458, 17893.8716258491],
    [0.00000000063, 2.50388232144, 52290.48938931711],
    [0.00000000072, 4.56353970752, 50800.27630078609],
    [0.00000000059, 6.11443002788, 52061.61081194667],
    [0.00000000077, 1.18313398787, 38813.6003938327],
    [0.0000000008, 4.87250848454, 26089.63143176599],
    [0.00000000069, 3.16809879958, 56727.51596272369],
    [0.0000000008, 3.94160294784, 26086.6624863494],
    [0.00000000058, 3.98600001818, 419.2408263917],
    [0.00000000066, 0.10285600557, 2008.8013566425],
    [0.00000000065, 3.63512616728, 66652.91364886488],
    [0.00000000058, 0.05018228362, 99024.38027539749],
    [0.00000000077, 0.77887041561, 103299.58800059189],
    [0.00000000069, 3.03766697714, 316.14805217309],
    [0.00000000061, 6.24933126885, 126997.18458038908],
    [0.00000000068, 1.78962458422, 137210.4701266001],
    [0.00000000058, 1.07398748672, 167850.32676523307],
    [0.00000000057, 1.06178740528, 26011.8808877821],
    [0.00000000062, 1.20172371901, 19316.9487228451],
    [0.00000000073, 4.4558204227, 26091.5406594487],
    [0.00000000055, 2.17291421134, 209812.84750217048],
    [0.00000000055, 3.55134929549, 44295.9609472929],
    [0.00000000058, 6.25406726323, 25508.4593720589],
    [0.00000000073, 2.05415256446, 18848.98373249069],
    [0.00000000056, 3.8414999457, 22625.9022531925],
    [0.00000000064, 5.21615906084, 77410.75686045409],
    [0.00000000054, 4.44562432663, 52252.31617190749],
    [0.00000000066, 0.17594911232, 77795.98825185168],
    [0.00000000055, 2.04378126827, 107794.43132874569],
    [0.00000000057, 3.42931686715, 24449.0774418697],
    [0.00000000055, 3.59192378031, 172402.28026229187],
    [0.00000000067, 2.93531319099, 19.42594341629],
    [0.00000000053, 3.70608451935, 32370.73517408209],
    [0.00000000052, 0.79212421214, 3340.36860921629],
    [0.00000000055, 3.60943961817, 220.6564599223],
    [0.00000000072, 3.16918804459, 24864.32911827909],
    [0.00000000052, 3.80711022251, 23868.9022199039],
    [0.0000000006, 5.14905673779, 90695.50825763689],
    [0.00000000052, 4.10578873491, 26312.4917547596],
    [0.00000000053, 0.28962121715, 19406.9221056581],
    [0.00000000053, 2.56330425325, 26667.8345460565],
    [0.0000000007, 0.08146254525, 2199.33116077051],
    [0.00000000059, 3.54477372961, 38.3768531213],
    [0.00000000051, 5.94337924391, 58857.2749540315],
    [0.0000000005, 4.20235040741, 129799.86223904048],
    [0.00000000067, 5.79256239224, 78257.32468330608],
    [0.0000000005, 5.35090323068, 27727.2164762457],
    [0.00000000048, 2.60487489461, 27044.4361150283],
    [0.00000000047, 4.10703352371, 51969.8645521947],
    [0.00000000055, 3.21272296258, 157057.35363202327],
    [0.0000000006, 2.71680609162, 85034.17620848469],
    [0.00000000049, 2.29047787617, 77631.16950289288],
    [0.00000000064, 4.7346858464, 76571.78757270369],
    [0.00000000046, 4.38909300675, 77836.86741636308],
    [0.00000000054, 4.21805017615, 23919.3864767751],
    [0.00000000047, 1.32745528662, 155572.0629253201],
    [0.00000000064, 5.63611607616, 27311.96479983631],
    [0.00000000046, 4.51657960486, 76681.99389392308],
    [0.00000000046, 0.05397462972, 29530.2342690561],
    [0.00000000053, 3.430959349, 49842.85370775989],
    [0.00000000055, 4.9537434201, 27037.32256802749],
    [0.00000000054, 2.11552363976, 949.4194264533],
    [0.00000000047, 4.957755207, 29550.3916649229],
    [0.00000000056, 2.31169429193, 53234.94439585409],
    [0.00000000062, 1.59919946431, 26011.39325281509],
    [0.00000000051, 6.10777700397, 28736.6017845307],
    [0.00000000045, 2.54247709679, 55504.18575691209],
    [0.00000000062, 6.05167319913, 176954.23375935067],
    [0.00000000043, 4.09072234194, 78903.8505285201],
    [0.00000000044, 2.10728026202, 16703.3059509825],
    [0.00000000052, 6.07065313687, 110012.70079796549],
    [0.0000000005, 3.89612671834, 25138.9713500879],
    [0.00000000043, 2.78443984846, 1272.9248431107],
    [0.00000000044, 3.76849382783, 105460.74730090669],
    [0.00000000058, 2.82347260176, 26094.77287109149],
    [0.00000000042, 0.46194308183, 1486.2239385487],
    [0.00000000042, 0.5110639244, 78189.17164363878],
    [0.00000000048, 4.0333518232, 65831.9105918083],
    [0.00000000054, 4.84278312652, 52382.23564906909],
    [0.00000000041, 1.77651394552, 1795.5022612045],
    [0.00000000043, 2.60404615127, 60055.65161900389],
    [0.00000000046, 4.86931523516, 54087.2495838491],
    [0.00000000053, 0.1335467182, 260878.78759825832],
    [0.00000000048, 5.22216564191, 25466.4031582185],
    [0.00000000048, 3.58305204289, 26709.8907598969],
    [0.00000000048, 0.57485699057, 76667.76679992149],
    [0.00000000047, 4.05954911572, 104275.59031250469],
    [0.00000000039, 5.4938314374, 132658.5166295413],
    [0.0000000004, 0.07089879206, 26824.02347258949],
    [0.0000000004, 2.44203081578, 25352.2704455259],
    [0.00000000043, 4.79238528651, 365230.88779952226],
    [0.00000000044, 0.28163075339, 52712.85461272729],
    [0.00000000045, 4.58626302576, 28256.9074413403],
    [0.00000000039, 0.56315956692, 103241.99019671988],
    [0.00000000051, 0.42021554272, 182085.87484340827],
    [0.0000000005, 0.52050720367, 147423.7556728111],
    [0.00000000043, 4.74188084964, 214364.80099922928],
    [0.00000000039, 4.16197164473, 99799.41525175449],
    [0.00000000044, 3.72596196534, 25867.73431661889],
    [0.00000000043, 0.20439431464, 1265.81129610991],
    [0.00000000038, 4.2462390584, 104505.6351942651],
    [0.00000000037, 4.01161399115, 104198.0775732955],
    [0.00000000037, 2.9632018256, 128320.99566497609],
    [0.00000000042, 3.6264785373, 25170.2166730759],
    [0.0000000004, 3.65913470233, 206.42936592071],
    [0.00000000038, 1.95151248327, 130459.42928625426],
    [0.00000000037, 2.36549717602, 26102.3740530593],
    [0.0000000005, 1.81815722451, 153.5349930013],
    [0.00000000037, 0.10000949167, 24203.24579564031],
    [0.00000000041, 5.40449209098, 34282.4222922663],
    [0.00000000036, 1.44241697006, 26118.4738200621],
    [0.00000000036, 1.07961540756, 26057.82009805329],
    [0.00000000036, 6.15630697749, 34281.9346572993],
    [0.00000000042, 1.45143122814, 38653.81102407349],
    [0.00000000035, 0.16883470965, 26073.91986505609],
    [0.00000000039, 5.17224451182, 27006.0772450395],
    [0.00000000039, 3.83113919893, 151.2914873264],
    [0.00000000037, 3.86078277718, 78367.04601642469],
    [0.00000000034, 1.99485322788, 27567.01353312209],
    [0.00000000035, 5.28138513945, 78896.73698151928],
    [0.00000000037, 2.43731961667, 25773.96077918809],
    [0.00000000037, 0.08471276095, 26402.33313892731],
    [0.00000000045, 5.51053584744, 2126.1212248627],
    [0.00000000037, 0.41442508719, 9384.59719059169],
    [0.00000000033, 1.23373917586, 116783.89903417809],
    [0.00000000035, 1.05079898841, 27463.9207589035],
    [0.00000000033, 5.24254633919, 51852.54468397449],
    [0.00000000037, 6.12798409572, 130420.0897644547],
    [0.00000000035, 2.14843472729, 62388.84801187589],
    [0.00000000033, 0.42458452244, 26190.1094773233],
    [0.00000000033, 2.09744785518, 25986.18444079209],
    [0.00000000035, 1.60180137355, 51653.47268253809],
    [0.00000000032, 4.47872593179, 39629.56816154889],
    [0.0000000004, 2.83686756644, 148.32254190981],
    [0.00000000043, 0.95235131647, 157587.0445971179],
    [0.00000000034, 2.42204384323, 27973.04812247509],
    [0.00000000043, 5.25286806261, 26308.5596014965],
    [0.0000000004, 2.56508188611, 205.9417309537],
    [0.00000000034, 5.1156253013, 13541.17738500769],
    [0.00000000031, 5.39821911963, 207594.0903979837],
    [0.00000000032, 2.88931723147, 204151.51545301828],
    [0.00000000034, 2.40270209936, 51868.4924796623],
    [0.00000000043, 1.44438681078, 51529.03926731709],
    [0.00000000031, 4.0110494214, 78160.86046798748],
    [0.00000000036, 5.64714725231, 130226.46042991648],
    [0.0000000003, 5.53920573257, 130432.64597835368],
    [0.00000000039, 4.02419894411, 64901.5035354069],
    [0.00000000031, 0.59714240312, 51433.0600400993],
    [0.00000000041, 1.72851918476, 40852.8983673605],
    [0.00000000039, 3.48396647568, 76674.39271195528],
    [0.00000000031, 1.66062366332, 94330.01910368088],
    [0.0000000003, 3.30916696393, 181026.49291321906],
    [0.0000000003, 1.35962398425, 96356.84030678908],
    [0.00000000029, 3.24046570458, 182188.96761762688],
    [0.00000000034, 5.68539193875, 111122.07935005888],
    [0.00000000031, 5.77478962928, 26514.25751496669],
    [0.00000000036, 2.47015155723, 75615.49841673308],
    [0.00000000028, 2.60390025059, 86143.55476057807],
    [0.00000000028, 5.41996849568, 80382.71710258449],
    [0.00000000037, 2.73064236635, 37698.6989174319],
    [0.0000000003, 5.69224082014, 77101.47853779829],
    [0.00000000029, 2.84649684108, 114.6429243969],
    [0.0000000003, 2.6071027613, 26084.21480579459],
    [0.00000000027, 2.18911511513, 26241.4381345755],
    [0.00000000027, 6.24126624865, 60369.83779887349],
    [0.00000000027, 4.34927842452, 101011.24395708049],
    [0.00000000027, 0.05549126696, 52509.9060414013],
    [0.00000000029, 6.20759958805, 26092.07911232079],
    [0.00000000033, 1.33379538421, 42153.72518556549],
    [0.00000000033, 1.1125766607, 49954.19346603489],
    [0.00000000027, 1.97164111012, 25933.8805136059],
    [0.00000000027, 5.75010433988, 91785.21704883048],
    [0.00000000026, 0.45274965388, 35472.9879671329],
    [0.00000000034, 5.96598332393, 22004.1584523533],
    [0.00000000026, 6.17560870969, 71980.38975724769],
    [0.00000000026, 4.75787796399, 130653.05862079248],
    [0.00000000029, 3.0258128854, 136722.8353753459],
    [0.00000000035, 6.2141120457, 52483.6077216015],
    [0.00000000027, 3.05142430504, 54375.1374439189],
    [0.00000000026, 4.3508154855, 26050.0139234199],
    [0.00000000033, 4.63692423082, 77727.14873011068],
    [0.00000000031, 4.44084625304, 87367.86023632369],
    [0.00000000028, 3.43792139137, 183571.1655501115],
    [0.00000000034, 4.71651658587, 1905.70858242391],
    [0.00000000028, 0.48686633466, 51226.87449166209],
    [0.00000000032, 6.03865727615, 77307.66408623548],
    [0.00000000033, 4.55124740226, 78039.60844650418],
    [0.00000000031, 2.3156141214, 60370.3254338405],
    [0.00000000033, 0.91420804533, 123201.08393375449],
    [0.00000000027, 5.63137827099, 1224.06165826211],
    [0.00000000025, 1.86918416559, 78338.73484077338],
    [0.00000000029, 3.85756830106, 49842.36607279289],
    [0.00000000025, 0.32014728581, 76785.08666814168],
    [0.00000000024, 1.09872540797, 24824.9895964795],
    [0.00000000031, 1.78245808102, 161079.6161639875],
    [0.00000000031, 0.13179619883, 75930.75684933408],
    [0.00000000024, 1.67322759859, 1045.3986536711],
    [0.00000000029, 4.01431074745, 25600.5122078035],
    [0.00000000029, 4.79090693735, 26575.7817103119],
    [0.00000000026, 4.40340514614, 39450.5966658569],
    [0.00000000027, 5.45015263034, 27171.2271913513],
    [0.00000000027, 3.35506505446, 25005.0667267641],
    [0.00000000032, 2.36425003443, 9103.6631766341],
    [0.00000000024, 0.92163258785, 129373.26404816448],
    [0.00000000023, 1.97682509801, 85502.14119883909],
    [0.00000000024, 1.70355204155, 52609.7618385087],
    [0.00000000025, 3.42869920852, 299.37021175271],
    [0.00000000027, 0.19474964949, 143005.9112253373],
    [0.00000000027, 6.01066977576, 24073.1652872599],
    [0.00000000025, 3.87710167982, 25654.43522118089],
    [0.00000000024, 5.68395366955, 52286.25642185129],
    [0.00000000023, 0.49611836531, 38813.11275886569],
    [0.00000000026, 5.95483109773, 27676.73221937449],
    [0.00000000023, 1.42348474713, 27351.3043216359],
    [0.00000000025, 6.12366793793, 48847.9144443517],
    [0.00000000028, 2.64147333193, 24925.6722546499],
    [0.00000000029, 2.84086630674, 30172.1354657621],
    [0.00000000026, 6.21853790794, 78153.74692098668],
    [0.00000000023, 1.26116961525, 50064.3997872543],
    [0.00000000024, 3.54764052332, 51962.26337022689],
    [0.00000000023, 6.03986636871, 77947.56137254949],
    [0.00000000023, 0.06002764715, 123669.0489241089],
    [0.00000000022, 0.26166099168, 78213.95662030189],
    [0.00000000025, 4.36791869246, 26725.1432310819],
    [0.00000000025, 4.43729899234, 25451.1506870335],
    [0.00000000022, 3.84821265527, 50264.8506174147],
    [0.0000000003, 0.70456092924, 53907.1724535645],
    [0.0000000003, 3.98527104604, 23754.46293121869],
    [0.00000000025, 1.7602644468, 1.7282901918],
    [0.00000000025, 4.90185710039, 1.24065522479],
    [0.00000000024, 4.62065948726, 78786.53066029989],
    [0.00000000022, 1.83132826724, 6885.39370741431],
    [0.00000000025, 4.82521606002, 130435.87818999648],
    [0.00000000022, 1.64259204266, 50444.9277476993],
    [0.00000000028, 4.68306520525, 6129.5408569901],
    [0.00000000025, 2.79403215015, 28103.1286308555],
    [0.00000000023, 0.48266477387, 103918.14464590348],
    [0.00000000025, 0.72627176075, 52174.56562792359],
    [0.00000000022, 5.90022439787, 2219.0009216703],
    [0.00000000022, 2.31815942379, 78580.34511186268],
    [0.00000000029, 4.48338221638, 1730.87853544909],
    [0.00000000022, 5.3707491111, 80597.1496350781],
    [0.00000000024, 2.29466576857, 51842.1941598625],
    [0.0000000002, 5.64534264808, 51955.63745819309],
    [0.00000000028, 3.75812407504, 536.5606946119],
    [0.0000000002, 5.51240603881, 23439.20449861769],
    [0.00000000023, 3.83447858759, 129387.49114216608],
    [0.00000000021, 3.97425392925, 163766.3382585287],
    [0.00000000025, 0.44166212589, 81604.56566890588],
    [0.00000000021, 1.44153243351, 1063.55790093581],
    [0.00000000023, 3.39790605489, 16342.8264032011],
    [0.00000000022, 0.58776873075, 96357.32794175608],
    [0.00000000023, 2.71345954853, 76144.70174686068],
    [0.0000000002, 6.01126822986, 51329.9672658807],
    [0.0000000002, 0.14753852345, 1089.95260867711],
    [0.0000000002, 5.38196984803, 123758.53467195488],
    [0.00000000019, 2.29671913556, 51535.66517935089],
    [0.00000000022, 5.56163358805, 3462.0008883817],
    [0.00000000021, 0.48380924328, 130290.19632821988],
    [0.00000000023, 2.36039511683, 50167.49256147289],
    [0.0000000002, 4.52844625012, 196137.3172500943],
    [0.00000000023, 1.1268992144, 166740.9482131397],
    [0.00000000026, 1.3283678314, 22747.04689739089],
    [0.00000000022, 4.770360189, 26126.2799946955],
    [0.00000000022, 4.14491043187, 26735.1577923725],
    [0.00000000019, 3.09805264388, 78683.43788608129],
    [0.0000000002, 3.83026958578, 75930.26921436709],
    [0.00000000024, 0.55752006618, 145204.9985686243],
    [0.00000000019, 2.12244186746, 130446.87307235529],
    [0.00000000024, 1.47596121866, 52177.53457334019],
    [0.00000000025, 3.25287024656, 130443.64086071249],
    [0.0000000002, 4.21784136757, 98690.03669966108],
    [0.00000000019, 1.9522676622, 103498.66000202828],
    [0.00000000025, 1.32070214805, 76888.17944236028],
    [0.00000000022, 5.54888786998, 24952.4700871645],
    [0.00000000022, 3.25632981482, 27223.8238309509],
    [0.00000000018, 1.58091743094, 78413.51643934069],
    [0.0000000002, 5.0179156259, 104819.8213741347],
    [0.00000000022, 4.95873027034, 129379.88996019828],
    [0.00000000019, 4.66235459384, 26248.5543284425],
    [0.00000000019, 4.14286309096, 25927.7395896729],
    [0.00000000019, 0.21911919049, 53029.2464823839],
    [0.00000000018, 2.61852920213, 128221.0024211677],
    [0.0000000002, 4.36521030279, 25908.0698287731],
    [0.0000000002, 4.44000738201, 26268.2240893423],
    [0.00000000019, 3.3635247628, 52817.46366237089],
    [0.00000000018, 0.30820161935, 26411.6523757151],
    [0.00000000022, 3.17947641824, 103932.37173990508],
    [0.00000000018, 0.03030733311, 52195.23222656469],
    [0.00000000024, 1.85700392205, 86144.04239554508],
    [0.0000000002, 5.09555302131, 12412.6167069815],
    [0.00000000025, 1.79034244495, 78313.94986411028],
    [0.0000000002, 3.61245706996, 233731.99016146208],
    [0.0000000002, 5.31801711889, 25234.9505773057],
    [0.00000000017, 0.72137211711, 53868.21577013429],
    [0.00000000017, 5.76650726054, 77307.86586563049],
    [0.00000000017, 5.48277957945, 24602.8562523545],
    [0.00000000017, 3.32243810535, 27573.4376657609],
    [0.00000000023, 0.08846433271, 14.47091148511],
    [0.00000000018, 5.51755241491, 52137.9170649941],
    [0.0000000002, 4.7118521153, 130866.35771623049],
    [0.00000000016, 1.12213372181, 79330.44871939608],
    [0.00000000018, 4.58737692359, 79316.22162539448],
    [0.00000000016, 4.0136544691, 3.6375178745],
    [0.00000000017, 1.24075088152, 121335.36489626988],
    [0.00000000019, 4.71477962898, 132028.83242063827],
    [0.00000000018, 1.49937345876, 102659.69071427788],
    [0.00000000018, 4.05618608857, 99023.89264043048],
    [0.00000000016, 6.02071363086, 50903.3690750047],
    [0.00000000019, 1.66314996355, 94138.08320260228],
    [0.00000000016, 4.53088777953, 28310.00359365469],
    [0.00000000016, 0.64879776309, 25668.17468021549],
    [0.00000000016, 4.77268559673, 24395.9812895553],
    [0.00000000019, 1.08691679951, 78793.15657233368],
    [0.00000000015, 0.94917563884, 155887.76538061467],
    [0.00000000022, 4.51216513703, 1055.6935944096],
    [0.00000000016, 1.31190457742, 65717.47130312308],
    [0.00000000021, 3.55864300611, 3178.38960805111],
    [0.00000000019, 0.15049069469, 106570.12585300008],
    [0.00000000015, 2.07036309837, 50690.06997956669],
    [0.00000000017, 1.7576869103, 55638.2948064971],
    [0.00000000016, 5.70225976378, 104358.4849426803],
    [0.00000000015, 5.84363368019, 6043.9847638919],
    [0.00000000016, 5.00133834312, 176332.4899585115],
    [0.00000000017, 0.43244881435, 62197.88738073129],
    [0.00000000017, 0.00750879129, 86457.74094044768],
    [0.00000000015, 1.85651180492, 52310.1591502169],
    [0.00000000015, 5.2219701382, 235900.75064374466],
    [0.00000000015, 3.1511080352, 61560.8911087071],
    [0.00000000017, 4.69846105326, 103821.67778371868],
    [0.00000000017, 3.00907412235, 153085.08772196327],
    [0.0000000002, 6.14864822525, 3.6883357796],
    [0.00000000014, 4.1150229296, 193938.22990680728],
    [0.00000000015, 1.04578402465, 50007.2896183493],
    [0.00000000015, 4.77727640495, 26831.1370195903],
    [0.00000000014, 5.09443528119, 133882.3344703199],
    [0.00000000017, 5.07246677176, 39629.08052658189],
    [0.00000000016, 0.34319621032, 77.9943614674],
    [0.00000000015, 3.15841157482, 125112.2834169717],
    [0.00000000014, 0.72227336641, 50380.79165691089],
    [0.00000000016, 2.56012166691, 104345.22782488028],
    [0.00000000014, 0.38043611029, 26247.4486938499],
    [0.00000000014, 2.14159626733, 25928.8452242655],
    [0.00000000014, 5.50060239494, 16066.3096789583],
    [0.00000000016, 2.2954009332, 50910.4826220055],
    [0.00000000018, 3.69702904204, 92740.81679043909],
    [0.00000000014, 4.21703179087, 1169.83206889211],
    [0.00000000016, 2.14445815847, 53815.1196178199],
    [0.00000000014, 2.88257919019, 78149.51395352086],
    [0.00000000016, 2.81981718118, 203042.13690092487],
    [0.00000000013, 1.94504793857, 639.6534688305],
    [0.00000000015, 4.50829948617, 77616.94240889128],
    [0.00000000014, 6.26019296208, 82815.41910429788],
    [0.00000000014, 0.03534802891, 29415.79498037089],
    [0.00000000014, 3.63252326636, 102755.66994149568],
    [0.00000000014, 3.29326661713, 109.9625037359],
    [0.00000000017, 4.87563601376, 163298.37326817427],
    [0.00000000015, 0.10955371106, 11.2895177474],
    [0.00000000014, 3.59146334775, 173511.6588143853],
    [0.00000000014, 2.82070907634, 52161.82300663029],
    [0.00000000012, 3.8480989473, 102018.17235594128],
    [0.00000000017, 4.21238157873, 52155.8927047651],
    [0.00000000013, 1.30925967982, 102769.89703549728],
    [0.00000000014, 5.554502302, 78378.3925308913],
    [0.00000000014, 1.64692338972, 26077.1012587938],
    [0.00000000014, 0.8751089879, 26099.1926593216],
    [0.00000000013, 5.4147356862, 79322.84753742829],
    [0.00000000016, 5.27893423231, 51534.63653889291],
    [0.00000000014, 2.87967584826, 20043.9183776823],
    [0.00000000016, 3.28350334233, 50050.17269325269],
    [0.00000000013, 5.27868567961, 44936.88687406489],
    [0.00000000014, 4.48508459393, 24506.18761077469],
    [0.00000000014, 5.39693340588, 35833.4675149143],
    [0.00000000012, 2.53842730053, 52388.86156110289],
    [0.00000000014, 0.36435456631, 198490.18340386607],
    [0.00000000013, 5.25497593084, 103719.07264446709],
    [0.00000000013, 0.67641393113, 24491.96051677309],
    [0.00000000013, 4.56168735677, 52025.99926853029],
    [0.00000000012, 5.97483232665, 25984.3647704771],
    [0.00000000012, 2.83038535815, 26191.9291476383],
    [0.00000000014, 3.16933912424, 53265.7588918255],
    [0.00000000016, 4.26587881339, 25653.94758621389],
    [0.00000000012, 4.37902547397, 181659.96606689427],
    [0.00000000014, 2.41047405735, 53399.86794141051],
    [0.00000000012, 4.85231087723, 53772.23654291649],
    [0.00000000012, 0.15443687995, 43981.7747674233],
    [0.00000000012, 4.35356873262, 28199.79727243529],
    [0.00000000015, 6.01961456404, 1638.82569970449],
    [0.00000000016, 4.44894827862, 34082.6754010819],
    [0.00000000012, 3.02030436898, 51596.3625136331],
    [0.00000000013, 4.9711914119, 52025.00243078899],
    [0.00000000011, 3.0769028375, 52911.92661416369],
    [0.00000000011, 0.32794444369, 70383.86408886709],
    [0.00000000012, 2.59844082236, 112231.45790215228],
    [0.00000000015, 3.22392612987, 103883.89139342589],
    [0.00000000012, 2.91594450386, 52171.68113030689],
    [0.00000000014, 3.00638739155, 26555.6243144451],
    [0.00000000013, 3.18586045586, 286966.6907398325],
    [0.00000000013, 3.44611140023, 208173.77798498247],
    [0.00000000013, 0.91076951955, 79219.06534884768],
    [0.00000000011, 3.27827227016, 52168.44891866409],
    [0.00000000011, 1.11898912575, 26012.87772552339],
    [0.00000000011, 0.60900872596, 48713.8053947667],
    [0.00000000014, 2.44543821114, 27998.85880730789],
    [0.00000000014, 5.7209534407, 52755.7376876307],
    [0.00000000014, 0.48193051968, 52041.9410510469],
    [0.00000000012, 0.49425636709, 131548.65044248087],
    [0.00000000012, 0.83151252253, 130363.49345407888],
    [0.00000000011, 3.57268529306, 104277.07478521299],
    [0.00000000014, 2.73442839497, 27250.62166346549],
    [0.00000000011, 5.15064427323, 51109.06698847489],
    [0.00000000011, 2.07371046178, 115674.03284711768],
    [0.00000000014, 4.1498001022, 49527.10764019189],
    [0.00000000013, 5.96769060739, 52027.97137620559],
    [0.00000000011, 1.61005858699, 57503.5262090147],
    [0.00000000013, 1.63784016727, 78470.13879064328],
    [0.00000000014, 0.28439536761, 860.55374623631],
    [0.00000000011, 2.58880557782, 92741.3044254061],
    [0.00000000013, 0.61221768763, 126996.69694542208],
    [0.00000000011, 5.96318002915, 20894.7799002599],
    [0.00000000012, 5.42728450538, 51440.17358710009],
    [0.00000000015, 2.18788554104, 24395.49365458829],
    [0.00000000012, 2.65321755374, 52179.98225389499],
    [0.00000000013, 5.060340879, 65716.98366815608],
    [0.00000000014, 5.96664556976, 3442.3311274819],
    [0.00000000011, 3.48111494779, 736.1203310153],
    [0.0000000001, 3.89350975005, 333.6121232859],
    [0.00000000011, 0.13376559849, 50536.98058344389],
    [0.0000000001, 4.16179119723, 26190.75209830929],
    [0.00000000012, 0.94216106603, 53758.00944891489],
    [0.00000000011, 0.5442582841, 26081.03076519069],
    [0.0000000001, 1.2262117191, 78340.21931348169],
    [0.00000000011, 3.31326356407, 78800.75775430149],
    [0.00000000012, 1.33333763675, 52179.4438010229],
    [0.0000000001, 2.68785159447, 84945.17809560569],
    [0.00000000011, 5.57716825787, 81592.08889848628],
    [0.00000000011, 0.93766822129, 641.16974425549],
    [0.00000000014, 6.24613692649, 183145.2567735975],
    [0.0000000001, 4.60397363665, 25863.8021633558],
    [0.0000000001, 1.98851340448, 53093.98038661369],
    [0.00000000011, 1.67023750371, 51123.29408247649],
    [0.00000000014, 5.58647092759, 25242.0641243065],
    [0.0000000001, 6.11242478468, 154408.89880655028],
    [0.00000000014, 1.36873803506, 54344.81058291449],
    [0.00000000011, 0.96041649146, 78057.76769376888],
    [0.00000000012, 6.03701341811, 26149.87293379789],
    [0.00000000012, 2.76820426669, 26026.4209843175],
    [0.0000000001, 5.41577140545, 637.24008950771],
    [0.0000000001, 0.79208503976, 91919.81373338249],
    [0.00000000014, 1.69865910615, 53125.22570960169],
    [0.00000000011, 3.682621948, 26094.2878829907],
    [0.00000000012, 2.92120571625, 136100.60393953967],
    [0.0000000001, 2.60636817601, 6751.28465782931],
    [0.0000000001, 2.45547925443, 137209.98249163307],
    [0.0000000001, 1.99206585077, 77940.44782554869],
    [0.0000000001, 4.36323003642, 45404.8518644193],
    [0.00000000013, 4.08389676067, 50270.5853356915],
    [0.00000000011, 3.67998983142, 77520.96318167349],
    [0.00000000011, 4.23345221973, 19958.8499195511],
    [0.0000000001, 1.41797581138, 25619.69433373629],
    [0.00000000011, 3.70832983935, 39763.6772111339],
    [0.0000000001, 2.60180323904, 54086.76194888209],
    [0.00000000009, 1.01216637956, 130593.53833583929],
    [0.00000000009, 0.36490625518, 26514.0557355717],
    [0.00000000009, 2.15712612244, 25662.2381825437],
    [0.0000000001, 5.58920157802, 101703.40155830729],
    [0.00000000013, 3.18899327846, 26161.44408491669],
    [0.00000000013, 5.61622440634, 26014.8498331987],
    [0.0000000001, 0.86888264917, 104991.75367009429],
    [0.0000000001, 5.95581190338, 52061.65099371849],
    [0.00000000009, 6.14534715408, 25131.85780308709],
    [0.00000000011, 4.00644107438, 183674.94773869208],
    [0.0000000001, 5.2049801752, 28791.7631137333],
    [0.0000000001, 4.4191926134, 4372.1201842577],
    [0.0000000001, 2.27148842605, 158746.41977111547],
    [0.00000000009, 0.68354219208, 45290.90021070109],
    [0.0000000001, 3.59637305781, 23384.5308043821],
    [0.00000000012, 4.17312463574, 76042.09660760908],
    [0.00000000012, 1.90077351195, 52396.4627430707],
    [0.00000000013, 4.38477804835, 1073.85284167431],
    [0.0000000001, 1.29598384915, 103924.77055793729],
    [0.0000000001, 5.0391751486, 91804.88680973028],
    [0.00000000009, 2.39884072609, 103189.38167937248],
    [0.00000000009, 4.93035759424, 156547.33242782846],
    [0.00000000009, 0.52304323222, 735.6326960483],
    [0.00000000009, 3.52896053406, 45494.33761226529],
    [0.00000000009, 5.71417505627, 114.68310616872],
    [0.00000000009, 0.77711516175, 130285.98071486969],
    [0.00000000013, 5.11754456085, 2168.5166647991],
    [0.0000000001, 5.91004109209, 32132.3755404331],
    [0.00000000009, 2.04038725108, 104984.64012309349],
    [0.00000000011, 1.8099473233, 19367.4329797163],
    [0.0000000001, 0.87896683804, 90989.40667698109],
    [0.00000000009, 4.68949629663, 25550.85481199529],
    [0.00000000009, 5.45561348471, 76255.39570304709],
    [0.00000000009, 2.84544963842, 31281.5140178555],
    [0.00000000012, 3.79992568717, 1699.5230339867],
    [0.00000000011, 5.50627359687, 220.16882495529],
    [0.00000000009, 0.84632922145, 51130.89526444429],
    [0.00000000011, 5.96410967567, 4022.50634944771],
    [0.00000000009, 0.39890242427, 52797.7939014711],
    [0.00000000009, 3.81505771377, 24844.6593573793],
    [0.00000000009, 4.99015997103, 27331.6345607361],
    [0.0000000001, 5.97083270008, 230239.41859459245],
    [0.00000000009, 2.46893459204, 156314.36357149068],
    [0.00000000011, 1.59945570289, 80175.1527254233],
    [0.00000000009, 3.62938673151, 129329.89333829407],
    [0.00000000008, 1.08654878495, 38634.6288981407],
    [0.00000000011, 4.12180664109, 46046.7530611253],
    [0.00000000009, 5.45527892151, 52190.2771946335],
    [0.00000000009, 2.96616057426, 25454.87558477749],
    [0.00000000009, 2.58378869705, 23439.6921335847],
    [0.00000000008, 0.94557962119, 102762.29585352947],
    [0.00000000011, 1.01537219957, 2538.4923217371],
    [0.0000000001, 1.53707512245, 391318.79094109643],
    [0.00000000008, 2.58065685518, 80174.66509045628],
    [0.00000000008, 4.23319522465, 142871.80217575227],
    [0.00000000009, 4.26758067831, 76152.30292882849],
    [0.0000000001, 5.47825003046, 54060.95126404929],
    [0.00000000009, 3.23120957887, 4.1759707466],
    [0.0000000001, 5.87240869715, 35472.50033216589],
    [0.0000000001, 1.00378919066, 125887.31839332868],
    [0.00000000008, 5.81576723468, 27360.8279846849],
    [0.00000000009, 0.97115189447, 1685.2959399851],
    [0.00000000009, 0.79804703659, 58458.63831565629],
    [0.00000000009, 0.54956806871, 25977.45300287129],
    [0.00000000009, 3.97874723563, 1485.0468892197],
    [0.00000000008, 1.17507209551, 2325.1932262991],
    [0.00000000009, 2.26549130862, 22595.5753921881],
    [0.00000000009, 5.61147436738, 52172.11794736879],
    [0.00000000008, 3.83518676972, 26934.2297938089],
    [0.00000000008, 0.59545092796, 1575.08961876571],
    [0.00000000008, 5.37389235751, 51876.9237063627],
    [0.0000000001, 1.95662555086, 2751.79141717511],
    [0.00000000008, 0.89302678287, 10681.49435404891],
    [0.00000000011, 3.21704132053, 28096.7044982167],
    [0.00000000008, 5.45338504662, 77956.3956212365],
    [0.00000000008, 0.89135797231, 52400.3948963338],
    [0.00000000008, 2.89179819588, 54824.5049261049],
    [0.0000000001, 1.50538632513, 240452.70414080346],
    [0.00000000008, 5.26980517423, 77741.37582411229],
    [0.00000000009, 3.90818318828, 24491.47288180609],
    [0.00000000008, 5.13755213219, 42791.2090925567],
    [0.00000000008, 3.13545736715, 52490.23628050151],
    [0.00000000008, 2.29664532419, 156520.5491199279],
    [0.00000000007, 4.49316157626, 52206.3769616363],
    [0.00000000008, 0.58751306444, 17098.67925362531],
    [0.00000000007, 3.1508243707, 50291.1489372145],
    [0.0000000001, 2.92644275072, 22065.8844270935],
    [0.00000000008, 1.07948674297, 51112.73601717959],
    [0.00000000009, 0.57156355893, 104454.94915799888],
    [0.0000000001, 1.70608986575, 441.06910236111],
    [0.0000000001, 2.64731129677, 49.7528044207],
    [0.00000000007, 2.09922885467, 7880.3329708225],
    [0.00000000007, 6.22957682161, 52182.67601266569],
    [0.00000000008, 4.88130543295, 52099.29639438929],
    [0.00000000007, 3.724921892, 122445.23108333028],
    [0.00000000008, 4.87864527535, 66940.80150893469],
    [0.00000000008, 4.83064762406, 187167.51930556167],
    [0.00000000009, 2.82365374916, 156507.9929060289],
    [0.00000000007, 5.45461374708, 51086.3413094383],
    [0.00000000008, 5.15492830863, 430.7741616226],
    [0.00000000008, 3.9653759975, 149288.98707532868],
    [0.00000000008, 0.69966864109, 49956.8053614781],
    [0.00000000007, 5.66541358879, 53132.33925660249],
    [0.00000000008, 4.19457404849, 100908.79380384788],
    [0.00000000007, 2.13361844991, 233681.99353955788],
    [0.00000000007, 0.76923088178, 104248.76360956169],
    [0.00000000008, 3.46520766649, 77314.77763323628],
    [0.00000000008, 4.96646407077, 112231.94553711927],
    [0.00000000007, 0.02649996061, 29396.6128544381],
    [0.00000000007, 2.49553241701, 22779.6810636773],
    [0.00000000009, 4.57445854869, 64741.71416564769],
    [0.00000000007, 4.38534662923, 26290.4003542318],
    [0.00000000007, 4.41987105557, 25885.89356388359],
    [0.00000000009, 5.1538730739, 25863.31452838879],
    [0.00000000007, 4.98170247896, 13655.6166736929],
    [0.00000000007, 1.46712503162, 156740.9617623667],
    [0.00000000008, 2.98540358627, 78571.51086317569],
    [0.00000000007, 1.57299130322, 52663.6848518861],
    [0.00000000007, 3.13857237569, 2118.5200428949],
    [0.00000000008, 3.34242363485, 102872.98980971589],
    [0.0000000001, 4.97428981699, 2703.3723371921],
    [0.00000000007, 5.14819246138, 52074.08758236629],
    [0.00000000007, 0.47864118434, 209659.06869168568],
    [0.00000000007, 2.10592218772, 149846.43781352908],
    [0.00000000007, 2.73796346194, 77417.87040745489],
    [0.00000000009, 5.86662388336, 56260.03860733629],
    [0.00000000007, 5.07150057843, 117892.78995130445],
    [0.00000000009, 1.31305807687, 18073.9487561337],
    [0.00000000007, 5.92131553777, 917.6864684983],
    [0.00000000008, 0.71246556222, 32808.8609383991],
    [0.00000000008, 0.19228169341, 207114.39605479327],
    [0.00000000008, 0.61342229584, 3308.22207789689],
    [0.00000000007, 1.34578982527, 23267.3158149315],
    [0.00000000007, 1.17624255235, 28908.9781031839],
    [0.00000000007, 4.68208072339, 37.88921815429],
    [0.00000000007, 1.41809701113, 19202.50943415989],
    [0.00000000007, 4.13036001377, 52145.72323962749],
    [0.00000000008, 2.80344738918, 103395.56722780968],
    [0.00000000007, 0.00761390447, 208276.8707592011],
    [0.00000000009, 3.38149297609, 2014.73785431429],
    [0.00000000007, 5.79510753162, 63786.6020590061],
    [0.00000000007, 1.26662001445, 24712.3731592119],
    [0.00000000007, 1.07441550954, 127099.14709865468],
    [0.00000000008, 4.81617793405, 120417.92224525509],
    [0.00000000008, 1.39078986683, 103815.05187168489],
    [0.00000000007, 2.5689914297, 8989.22388794889],
    [0.00000000008, 3.19497137388, 579.4437695153],
    [0.00000000007, 3.93035335903, 1135.4330544097],
    [0.00000000006, 3.50717502178, 27574.1270801229],
    [0.00000000007, 4.3415799743, 102976.08258393449],
    [0.00000000006, 2.2622742656, 28774.8690535989],
    [0.00000000006, 0.25975811202, 23401.4248645165],
    [0.00000000006, 6.10166450881, 80463.04058549309],
    [0.00000000008, 0.39455403552, 51258.1198146501],
    [0.00000000006, 2.04791015101, 23704.95394428149],
    [0.00000000006, 0.47412222661, 28471.3399738339],
    [0.00000000006, 3.25327779066, 55618.1374106303],
    [0.00000000007, 0.04757570199, 53311.7269725251],
    [0.00000000007, 3.96061402799, 1802.6158082053],
    [0.00000000008, 3.11255216313, 102018.65999090829],
    [0.00000000007, 3.75772081758, 79995.0755951387],
    [0.00000000007, 3.47532912865, 52278.0126188975],
    [0.00000000008, 0.17460078065, 1162.23088692429],
    [0.00000000006, 4.4977614696, 53439.2074632101],
    [0.00000000007, 0.23469102383, 29580.7185259273],
    [0.00000000007, 2.10834895065, 27388.97377726269],
    [0.00000000007, 0.41368342697, 24787.3201408527],
    [0.00000000006, 2.20070614265, 106470.62024415868],
    [0.00000000007, 1.31790121285, 104127.51158807839],
    [0.00000000007, 5.05330889636, 27624.1237020271],
    [0.00000000007, 3.75190878844, 24552.1702160883],
    [0.00000000008, 5.40150242632, 948.9317914863],
    [0.00000000007, 1.2362616715, 6680.98103591609],
    [0.00000000008, 5.48806422287, 51861.86392076229],
    [0.00000000008, 2.01472939327, 51554.3062997927],
    [0.00000000007, 5.80107722174, 26720.44306340389],
    [0.00000000007, 1.27572316405, 52214.1831362697],
    [0.00000000007, 4.01717883587, 25572.68308796469],
    [0.00000000007, 4.78803884893, 26603.6108301507],
    [0.00000000007, 3.81203720019, 415.7963080956],
    [0.00000000008, 5.83496057018, 54191.0317724297],
    [0.00000000006, 1.87365150772, 24505.69997580769],
    [0.00000000007, 2.72912420029, 2974.85377209451],
    [0.00000000007, 2.73283247417, 48092.0615939275],
    [0.00000000006, 2.27207352577, 78043.54059976728],
    [0.00000000006, 0.76622305958, 19202.99706912689],
    [0.00000000006, 0.12929656543, 53661.3408073351],
    [0.00000000006, 4.92644191429, 104426.63798234759],
    [0.00000000006, 4.97320423795, 27883.4054027787],
    [0.00000000006, 1.52227576605, 156523.7813315707],
    [0.00000000008, 4.29203597963, 51120.60032370579],
    [0.00000000006, 6.23544000173, 226.07308589371],
    [0.00000000008, 5.231179138, 48997.9043100643],
    [0.00000000006, 3.11031405202, 149756.9520656831],
    [0.00000000007, 3.39730503781, 4083.74468922089],
    [0.00000000008, 2.23399255632, 53259.1303329255],
    [0.00000000006, 3.49957202036, 130006.04778747768],
    [0.00000000007, 6.08095772039, 162810.7385169201],
    [0.00000000006, 0.64154839978, 27441.8957040745],
    [0.00000000006, 1.88048397784, 24734.3982140409],
    [0.00000000007, 0.08806115428, 55503.69812194508],
    [0.00000000008, 1.92055633433, 422.9098550964],
    [0.00000000006, 5.1152281543, 76777.97312114088],
    [0.00000000006, 3.95276470433, 155461.16718973868],
    [0.00000000006, 2.81558483589, 50161.0684288341],
    [0.00000000006, 3.77961930116, 78262.46876949779],
    [0.00000000006, 2.10450702949, 223.1041404771],
    [0.00000000006, 2.19241811447, 78225.82020656829],
    [0.00000000006, 3.79548807692, 76468.69479848508],
    [0.00000000006, 3.10628150548, 78597.8091829755],
    [0.00000000007, 5.87498441401, 30110.4094910219],
    [0.00000000006, 1.9238812165, 35077.61466449009],
    [0.00000000007, 2.98999765548, 1884.65734593389],
    [0.00000000007, 6.11933292351, 1082.8364148101],
    [0.00000000006, 3.53656686, 5193.12324131429],
    [0.00000000006, 3.60785310094, 171292.9017101985],
    [0.00000000006, 4.43885235196, 25984.56654987209],
    [0.00000000006, 2.63023124509, 29864.5778447925],
    [0.00000000006, 6.1749864397, 22311.7160733229],
    [0.00000000006, 2.8165735102, 76991.27221657889],
    [0.00000000005, 5.40188161644, 27410.8246065891],
    [0.00000000005, 3.40333606836, 24765.4693115263],
    [0.00000000006, 0.12287107983, 51092.9698683383],
    [0.00000000007, 5.41576313041, 88476.75115345008],
    [0.00000000007, 1.20946078842, 34102.3451619817],
    [0.00000000005, 2.83164430151, 2686.4782770577],
    [0.00000000006, 3.98658256476, 31903.2578186947],
    [0.00000000006, 4.81863512004, 20273.0360994207],
    [0.00000000006, 1.29004214195, 104874.43380187408],
    [0.00000000005, 0.59730065618, 155475.3942837403],
    [0.00000000005, 4.57106999295, 128747.59385585209],
    [0.00000000005, 3.4802041223, 26500.51805593209],
    [0.00000000005, 5.3250135625, 25675.7758621833],
    [0.00000000007, 5.70848080046, 25234.46294233869],
    [0.00000000005, 4.12117505892, 53551.8239004777],
    [0.00000000005, 5.05855634652, 60170.5785426561],
    [0.00000000005, 4.48575981388, 27353.71443768409],
    [0.00000000007, 2.75081241109, 52602.16065654089],
    [0.00000000005, 3.92111104398, 128106.07549751546],
    [0.00000000005, 0.45323700456, 629.0954035336],
    [0.00000000005, 2.88226149102, 35191.56631820829],
    [0.00000000006, 0.61158685386, 3492.8153843531],
    [0.00000000007, 3.24751127495, 169093.81436691148],
    [0.00000000006, 0.00555930589, 81591.60126351927],
    [0.00000000006, 3.27898581061, 25462.4767667453],
    [0.00000000006, 5.52623187419, 26713.81715137009],
    [0.00000000007, 1.40182187541, 2641.5850959557],
    [0.00000000005, 2.2257157061, 58220.2786820073],
    [0.00000000005, 1.13017778403, 52813.0463726561],
    [0.00000000006, 6.23315922928, 156531.54400228668],
    [0.00000000005, 5.91150949505, 26236.225683484],
    [0.00000000007, 6.01504388975, 9745.07673837309],
    [0.00000000005, 3.16675569939, 26035.0508067433],
    [0.00000000005, 5.63846198541, 26141.24311137209],
    [0.00000000006, 2.65718358525, 117873.12019040468],
    [0.00000000006, 2.3006953625, 28214.02436643689],
    [0.00000000005, 5.51855350061, 487.39093377069],
    [0.00000000006, 2.84193454109, 53764.63536094869],
    [0.00000000005, 2.79855313555, 104035.46451412368],
    [0.00000000006, 3.26310713546, 437.8877086234],
    [0.00000000005, 2.17730624219, 52098.29955664799],
    [0.00000000006, 3.1052607291, 98068.29289882188],
    [0.00000000005, 1.17059070361, 65538.49980743109],
    [0.00000000005, 0.6078680563, 189854.24140010288],
    [0.00000000005, 0.07976631221, 76138.07583482689],
    [0.00000000005, 3.31240476519, 104301.85976187608],
    [0.00000000005, 5.17958441161, 1243.73141916191],
    [0.00000000005, 5.92076756755, 118829.20756698029],
    [0.00000000006, 4.31566445968, 13675.2864345927],
    [0.00000000005, 3.70296203327, 153084.60008699627],
    [0.00000000006, 3.07685642656, 13.9832765181],
    [0.00000000005, 4.76122192085, 78697.66498008289],
    [0.00000000005, 5.20357112241, 26610.23674218449],
    [0.00000000005, 0.29390226295, 1052.02456570489],
    [0.00000000005, 5.27501982781, 149.3193796511],
    [0.00000000006, 1.42019585673, 122444.74344836328],
    [0.00000000006, 3.75361834376, 24822.5794804313],
    [0.00000000005, 2.37687918815, 26162.44092265799],
    [0.00000000005, 4.48428750718, 154.0226279683],
    [0.00000000005, 4.82516506006, 104401.85300568449],
    [0.00000000005, 5.03758504482, 53654.91667469629],
    [0.00000000005, 0.38799912808, 118828.71993201328],
    [0.00000000005, 1.40704909535, 191.2044486281],
    [0.00000000005, 1.05885873562, 124777.93984123527],
    [0.00000000005, 4.57253368744, 51006.46184922329],
    [0.00000000006, 2.99064022137, 104241.65006256089],
    [0.00000000005, 5.3673431379, 104668.24825343689],
    [0.00000000004, 4.69357830395, 76532.8308892735],
    [0.00000000006, 2.26469618573, 75615.01078176608],
    [0.00000000004, 3.91764666613, 24608.79275002629],
    [0.00000000004, 0.77605401254, 24609.2803849933],
    [0.00000000005, 3.59914095117, 23389.6955116805],
    [0.00000000005, 5.20607673363, 28786.5984064349],
    [0.00000000004, 5.84756896317, 31775.7773280097],
    [0.00000000004, 2.95764872163, 20400.5165901057],
    [0.00000000005, 6.27101158445, 107679.50440509345],
    [0.00000000004, 4.55685472779, 13541.6650199747],
    [0.00000000005, 0.8673823195, 29428.27175079049],
    [0.00000000005, 0.59524275071, 26.0545023163],
    [0.00000000004, 2.28993527511, 25764.64154240029],
    [0.00000000005, 4.5254130108, 78265.43771491438],
    [0.00000000006, 0.7820671998, 51688.4153493777],
    [0.00000000006, 1.53449593067, 23865.80268949369],
    [0.00000000004, 1.1673360775, 35211.72371407509],
    [0.00000000004, 1.35469630012, 16964.57020404031],
    [0.00000000004, 4.36135738215, 47804.1737338577],
    [0.00000000004, 5.40330574142, 77623.56832092509],
    [0.00000000005, 5.21473868834, 86458.22857541469],
    [0.00000000004, 5.79724758149, 27040.2235823173],
    [0.00000000004, 3.00797010331, 25136.0703357981],
    [0.00000000005, 3.02879597074, 25778.86863640189],
    [0.00000000005, 5.77642171406, 26397.42528171349],
    [0.00000000005, 2.45203846176, 78374.15956342549],
    [0.00000000004, 5.04872942833, 48834.95003896509],
    [0.00000000005, 0.30596644618, 25771.26745443409],
    [0.00000000004, 0.10837463046, 33480.6013611425],
    [0.00000000004, 2.41365774716, 18695.6925569729],
    [0.00000000005, 5.31228827456, 703.8770021009],
    [0.00000000004, 3.53618772681, 156378.09946979408],
    [0.00000000005, 1.85614150808, 155467.7931017725],
    [0.00000000005, 2.86964254252, 26404.05119374729],
    [0.00000000004, 1.76062802705, 9123.33293753389],
    [0.00000000005, 0.75540582554, 2015.9149036433],
    [0.00000000004, 5.33219851688, 76998.38576357969],
    [0.00000000004, 4.84304007509, 129586.56314360249],
    [0.00000000004, 1.42347412662, 1368.9040703285],
    [0.00000000004, 6.20388780658, 45425.0092602861],
    [0.00000000004, 3.82794287315, 28928.6478640837],
    [0.00000000004, 4.97727481165, 23247.6460540317],
    [0.00000000004, 3.79698584398, 23866.2903244607],
    [0.00000000004, 0.78108419173, 20453.1132297053],
    [0.00000000004, 1.74094818589, 31723.1806884101],
    [0.00000000004, 0.7325215187, 26239.19462890059],
    [0.00000000004, 0.40730526869, 199599.56195595945],
    [0.00000000004, 1.20756668103, 52356.1272309165],
    [0.00000000004, 2.82011030245, 26137.65594599489],
    [0.00000000004, 1.89262749454, 51539.0538286077],
    [0.00000000004, 2.12864958126, 32279.1699733045],
    [0.00000000004, 0.39338279636, 19897.1239448109],
    [0.00000000004, 0.13108394311, 78905.36680394509],
    [0.00000000004, 1.42991389286, 52336.4574700167],
    [0.00000000004, 4.11596381659, 50912.8927380537],
    [0.00000000005, 5.25156458726, 26085.17801364109],
    [0.00000000005, 3.55365309754, 26091.1159044743],
    [0.00000000004, 4.55748177466, 25441.13612574289],
    [0.00000000004, 1.77632201645, 25923.71104846829],
    [0.00000000004, 0.74571036117, 26252.58286964711],
    [0.00000000004, 2.50276715961, 24925.18461968289],
    [0.00000000005, 5.55461968829, 13706.1009305641],
    [0.00000000005, 3.25059799651, 38470.19298755129],
    [0.00000000005, 3.1281653861, 18227.7275666185],
    [0.00000000005, 5.6770522987, 33948.5663514969],
    [0.00000000005, 1.28804998148, 10.8018827804],
    [0.00000000004, 4.38061016047, 147423.26803784407],
    [0.00000000004, 4.94619430058, 120225.98634417648],
    [0.00000000004, 4.22377863391, 95.7354097343],
    [0.00000000004, 2.78744864067, 74935.81758592589],
    [0.00000000004, 1.85033590581, 142871.31454078527],
    [0.00000000004, 5.08828008747, 26131.0300339611],
    [0.00000000004, 3.71693759733, 26045.2638841543],
    [0.00000000004, 4.81796795304, 1066.2516597065],
    [0.00000000004, 2.30874038706, 25035.39094090229],
    [0.00000000005, 5.79505565508, 1577.0997249643],
    [0.00000000004, 2.13386788705, 1262.91354509469],
    [0.00000000005, 4.43555583939, 51102.44107644109],
    [0.00000000004, 2.69709923008, 106262.56823203048],
    [0.00000000004, 6.19718375992, 104771.34102765548],
    [0.00000000005, 6.11030752375, 179172.99086353747],
    [0.00000000004, 5.45224037983, 52329.34127614969],
    [0.00000000005, 0.05651935942, 151200.1865585459],
    [0.00000000004, 1.76945825888, 18319.7804023631],
    [0.00000000004, 0.75257411874, 33856.5135157523],
    [0.00000000005, 2.2366506942, 51315.74017187909],
    [0.00000000004, 1.69359058279, 159970.2376118941],
    [0.00000000005, 3.45474588143, 107692.46881048009],
    [0.00000000004, 4.69804652488, 24182.19455915029],
    [0.00000000004, 5.36463943224, 25021.16384690069],
    [0.00000000005, 1.47989657697, 49637.8015963783],
    [0.00000000004, 5.1965765685, 64901.01590043989],
    [0.00000000005, 5.34571928246, 77930.09730143669],
    [0.00000000004, 2.13537389331, 106685.05277665229],
    [0.00000000004, 1.302413747, 25249.1776713073],
    [0.00000000004, 1.21961863062, 26927.11624680809],
    [0.00000000005, 6.25905047664, 130020.27488147929],
    [0.00000000004, 0.16897355283, 42430.7295447753],
    [0.00000000004, 1.81097172729, 189386.27640974845],
    [0.00000000004, 1.67938382417, 130907.72451570889],
    [0.00000000004, 0.49273474013, 76352.7537589889],
    [0.00000000004, 0.60720939762, 78050.16651180109],
    [0.00000000004, 3.8130376126, 26507.14396796589],
    [0.00000000004, 5.10986588518, 21715.78295731649],
    [0.00000000004, 2.24959479186, 50690.7593939287],
    [0.00000000003, 4.11846884673, 76095.19275992349],
    [0.00000000004, 5.11517156658, 27047.2698190153],
    [0.00000000004, 3.69004611822, 25129.0240991001],
    [0.00000000003, 2.87423294156, 25980.8416521281],
    [0.00000000003, 5.93098474324, 26195.4522659873],
    [0.00000000004, 3.06482161328, 52165.00440036799],
    [0.00000000004, 4.26611311394, 104881.05971390787],
    [0.00000000004, 3.03103303969, 8044.7688814119],
    [0.00000000005, 4.86351403293, 45455.3361212905],
    [0.00000000004, 0.29804014939, 25565.08190599689],
    [0.00000000004, 0.98706116692, 215942.1445416771],
    [0.00000000004, 3.84907251953, 25992.1677318399],
    [0.00000000004, 4.95614516527, 26184.1261862755],
    [0.00000000003, 1.64017894322, 129909.58092529287],
    [0.00000000004, 2.78312246204, 48153.7875686677],
    [0.00000000005, 6.06876669605, 10059.7505532097],
    [0.00000000004, 5.16058547691, 16496.6052136859],
    [0.00000000004, 3.64463220789, 35679.6887044295],
    [0.00000000004, 2.60946762791, 103395.76900720468],
    [0.00000000004, 2.31682392343, 51040.3732287387],
    [0.00000000003, 0.92201563297, 125111.79578200469],
    [0.00000000004, 0.89339658044, 128843.57308306987],
    [0.00000000004, 0.91042238998, 52015.64273124709],
    [0.00000000004, 3.6088133765, 621.9876183227],
    [0.00000000003, 6.06256841288, 23113.5370044467],
    [0.00000000003, 2.74264927192, 29062.7569136687],
    [0.00000000003, 4.85231198714, 25794.7361746805],
    [0.00000000003, 3.95290569766, 26381.5577434349],
    [0.00000000003, 3.2212726199, 78283.13536813887],
    [0.00000000004, 1.30518138816, 26037.66270218649],
    [0.00000000004, 5.49977739982, 23543.4743221653],
    [0.00000000004, 3.30544028498, 28632.8195959501],
    [0.00000000003, 0.77597702447, 26279.5952251693],
    [0.00000000003, 1.74605535315, 25896.6986929461],
    [0.00000000004, 2.60606940279, 25998.6612112117],
    [0.00000000004, 6.19914828201, 26177.63270690369],
    [0.00000000003, 3.02425517786, 24079.10178493169],
    [0.00000000003, 1.26642446783, 49851.10069181629],
    [0.00000000004, 4.75573366952, 14235.79189565871],
    [0.00000000004, 4.04948401528, 37940.50202245669],
    [0.00000000003, 1.62600802494, 41494.79956406649],
    [0.00000000004, 2.15333731098, 261988.6537853188],
    [0.00000000003, 4.80360212129, 61560.40347374009],
    [0.00000000004, 4.57728207743, 32217.4439985643],
    [0.00000000003, 1.10122747342, 78243.79584633929],
    [0.00000000004, 1.13276960181, 51995.9729703473],
    [0.00000000003, 5.60306507247, 154308.9055627419],
    [0.00000000003, 4.9072565263, 78398.0622917911],
    [0.00000000003, 1.65138805728, 202420.39310008567],
    [0.00000000003, 3.28257147962, 79117.14962395809],
    [0.00000000004, 0.10028058442, 28420.8557169627],
    [0.00000000003, 6.21316075804, 313054.5938814067],
    [0.00000000003, 0.25268995906, 26114.4452788575],
    [0.00000000003, 2.26934241856, 26061.8486392579],
    [0.00000000003, 1.45372655722, 116783.41139921108],
    [0.00000000003, 4.65338616524, 2169.0042997661],
    [0.00000000003, 4.91794356627, 32131.88790546609],
    [0.00000000003, 4.52136661001, 68241.62832713968],
    [0.00000000004, 0.55663803534, 49424.5025009403],
    [0.00000000003, 1.53998283633, 27993.6117239981],
    [0.00000000004, 1.48359617562, 156954.26085780468],
    [0.00000000004, 5.24222478531, 52021.78365518009],
    [0.00000000004, 4.16132549519, 192828.8513547139],
    [0.00000000003, 4.98600736246, 25345.1568985251],
    [0.00000000003, 0.24502022671, 87648.7942502813],
    [0.00000000003, 2.25580297503, 105410.75067900248],
    [0.00000000003, 2.35998158508, 130446.38808425449],
    [0.00000000003, 1.34307352948, 45290.41257573408],
    [0.00000000003, 0.38732763509, 251775.36823910786],
    [0.00000000004, 5.98737648746, 50952.23225985329],
    [0.00000000003, 6.14909241029, 23421.09462541629],
    [0.00000000003, 2.65612527451, 28755.19929269911],
    [0.00000000003, 5.55350394783, 163297.88563320728],
    [0.00000000003, 5.04626720292, 26727.55661040469],
    [0.00000000004, 5.00773877934, 24711.88552424489],
    [0.00000000003, 5.25171311588, 111590.04434041328],
    [0.00000000004, 5.00370301079, 50476.77088412869],
    [0.00000000003, 2.64378251337, 52072.2679120513],
    [0.00000000003, 2.04712691944, 77622.5396804671],
    [0.00000000003, 5.19234087353, 52016.7483658397],
    [0.00000000003, 0.11683553157, 25970.8270908375],
    [0.00000000003, 2.40519684605, 26205.4668272779],
    [0.00000000004, 3.70857620718, 27511.7116910207],
    [0.00000000004, 5.09664147762, 24664.5822270947],
    [0.00000000003, 0.72953121469, 33918.23949049249],
    [0.00000000003, 1.79250116293, 18258.0544276229],
    [0.00000000004, 0.12046155373, 112545.64408202188],
    [0.00000000004, 2.19368586548, 61921.3706564885],
    [0.00000000003, 1.35496442859, 51741.85072778809],
    [0.00000000003, 1.31287870388, 222225.22039166847],
    [0.00000000003, 5.87130809057, 78249.72614820449],
    [0.00000000004, 1.48902081585, 158116.7355622125],
    [0.00000000003, 5.25522824422, 73891.58924046489],
    [0.00000000003, 0.31258950206, 26387.2733533269],
    [0.00000000003, 4.52577588776, 12725.6972522585],
    [0.00000000003, 3.47716392063, 26984.2264157131],
    [0.00000000003, 5.32805376417, 25192.0675024023],
    [0.00000000003, 5.05935500666, 103498.17236706128],
    [0.00000000003, 5.46073958753, 79487.77108298469],
    [0.00000000003, 3.01230527787, 50579.37602338029],
    [0.00000000003, 5.01426493917, 143980.69309287865],
    [0.00000000003, 4.06152997793, 91805.37444469729],
    [0.00000000003, 1.54880317183, 50490.99797813029],
    [0.00000000003, 1.42463612574, 54879.6662553075],
    [0.00000000003, 3.12587906085, 55484.5159960123],
    [0.00000000003, 6.21651664332, 2332.9525753885],
    [0.00000000003, 6.10767041127, 1383.13116433011],
    [0.00000000003, 0.21479933904, 128106.56313248246],
    [0.00000000003, 5.41781200857, 1471.9968445471],
    [0.00000000003, 3.15521647543, 146505.82538682927],
    [0.00000000004, 5.8046638214, 102232.60488843489],
    [0.00000000003, 3.47413746108, 24510.8034166099],
    [0.00000000003, 5.33108022372, 27665.4905015055],
    [0.00000000004, 3.03503390629, 26365.1819527991],
    [0.00000000004, 5.77018377851, 25811.11196531629],
    [0.00000000003, 4.73983619092, 106263.05586699749],
    [0.00000000003, 1.92656985885, 50601.2042993497],
    [0.00000000003, 5.01250465817, 179967.11098302988],
    [0.00000000003, 3.10770566817, 210921.73841929683],
    [0.00000000003, 6.02863621669, 26202.5460659711],
    [0.00000000003, 1.18743831658, 2821.07496160971],
    [0.00000000003, 4.69341673957, 5020.16230489671],
    [0.00000000003, 3.22922107727, 229463.89598326845],
    [0.00000000003, 1.31139605087, 71378.31571730827],
    [0.00000000003, 6.13912071583, 29001.0309389285],
    [0.00000000003, 2.66609696897, 23175.26297918689],
    [0.00000000003, 2.25383916432, 15406.40878752529],
    [0.00000000003, 2.75613383037, 25940.06823463139],
    [0.00000000003, 0.81910869714, 220026.13304838145],
    [0.00000000003, 5.30888840501, 963.6465204549],
    [0.00000000003, 1.30036577443, 113455.76337789789],
    [0.00000000003, 6.07147026831, 49201.4401460209],
    [0.00000000003, 4.25244825934, 143165.2129601295],
    [0.00000000003, 0.81593599477, 51735.22481575429],
    [0.00000000003, 1.27452500023, 25914.69838767311],
    [0.00000000003, 1.24750737739, 26261.59553044229],
    [0.00000000003, 3.64962054328, 51745.51975649279],
    [0.00000000002, 1.46486531145, 25554.52384069999],
    [0.00000000002, 1.05716706617, 26621.77007741539],
    [0.00000000003, 3.63673845964, 25530.6962208573],
    [0.00000000003, 5.16847922516, 26645.5976972581],
    [0.00000000002, 5.30160804243, 99979.49238203908],
    [0.00000000003, 3.46486175917, 25626.81052760331],
    [0.00000000003, 5.34035592563, 26549.48339051209],
    [0.00000000003, 4.02837363457, 23976.4966456801],
    [0.00000000003, 3.77281945049, 20956.5058750001],
    [0.00000000003, 5.03239823431, 31219.7880431153],
    [0.00000000002, 5.45450198288, 242985.64742485987],
    [0.00000000002, 6.25807160883, 133767.40754666767],
    [0.00000000003, 2.87262383804, 283524.6034298342],
    [0.00000000002, 2.72683369817, 127790.81706491447],
    [0.00000000002, 2.72683369816, 127791.30469988148],
    [0.00000000002, 3.86040326075, 71378.80335227528],
    [0.00000000002, 3.01852194681, 21202.3375212295],
    [0.00000000002, 5.78669573799, 30973.9563968859],
    [0.00000000003, 1.89994220844, 2353.1099712553],
    [0.00000000003, 0.9136395826, 76358.48847726568],
    [0.00000000003, 1.60976861498, 24292.40088036969],
    [0.00000000003, 3.61818924103, 157636.55358405507],
    [0.00000000003, 5.54528574622, 25361.6649391875],
    [0.00000000003, 3.25993193858, 26814.6289789279],
    [0.00000000002, 5.95736615747, 57369.41715942969],
    [0.00000000003, 3.844458977, 52187.0958008958],
    [0.00000000003, 5.60002249822, 49953.70583106789],
    [0.00000000002, 6.18039190992, 110396.0849651557],
    [0.00000000002, 0.99675798287, 273311.3178836232],
    [0.00000000002, 2.52419479264, 7994.2846245407],
    [0.00000000002, 1.06541336121, 31127.7352073707],
    [0.00000000002, 1.45661901641, 21048.5587107447],
    [0.00000000002, 4.88076203498, 27133.30179524529],
    [0.00000000002, 2.24228548233, 289185.9354789864],
    [0.00000000002, 2.2821816752, 5634.7899118689],
    [0.00000000002, 3.33192280402, 108903.32224587208],
    [0.00000000003, 4.49860650606, 128857.80017707148],
    [0.00000000002, 0.10562255755, 5687.3865514685],
    [0.00000000003, 3.16048516532, 21650.63275068411],
    [0.00000000003, 5.64473251948, 30525.66116743129],
    [0.00000000003, 5.20937667539, 117.5636857037],
    [0.00000000002, 0.61090203417, 29266.2927496253],
    [0.00000000002, 1.08851105464, 24176.45984087349],
    [0.00000000002, 1.68398359832, 102129.99974918329],
    [0.00000000003, 2.77323027693, 53338.52480503969],
    [0.00000000003, 1.56140703602, 67608.51339047348],
    [0.00000000002, 1.64261819628, 267649.985834471],
    [0.00000000002, 0.35074176404, 544.1618765797],
    [0.00000000002, 5.34557611286, 54862.7721951731],
    [0.00000000002, 0.00658372278, 162188.5070811139],
    [0.00000000002, 1.24227084874, 123554.12200045666],
    [0.00000000003, 5.22200424544, 47803.68609889069],
    [0.00000000002, 2.25109608564, 112546.1317169889],
    [0.00000000002, 2.34818806724, 71024.79001563908],
    [0.00000000003, 1.82596797402, 24971.65485996349],
    [0.00000000003, 0.6960644036, 27204.6390581519],
    [0.00000000002, 3.44738180328, 26165.89750304159],
    [0.00000000003, 2.81683191154, 14477.5950006835],
    [0.00000000002, 1.34089550191, 97466.21885888245],
    [0.00000000002, 3.66953582983, 8482.40701076191],
    [0.00000000003, 1.55932656916, 206584.7050896987],
    [0.00000000003, 1.85898364174, 25881.47377565349],
    [0.00000000002, 2.20662264774, 105306.96849042189],
    [0.00000000003, 1.29582724688, 7768.12273921109],
    [0.00000000002, 2.32161458508, 263097.54470244516],
    [0.00000000002, 5.46320723867, 263098.03233741224],
    [0.00000000002, 1.96333630845, 90988.91904201408],
    [0.00000000003, 4.5868449413, 5814.86704215349],
    [0.00000000003, 5.57796892253, 49976.9627573449],
    [0.00000000003, 1.11744370489, 27161.7559832485],
    [0.00000000002, 4.55377851088, 27151.46104250999],
    [0.00000000003, 0.04149717596, 29051.0275608327],
    [0.00000000003, 2.48053520166, 23125.2663572827],
    [0.00000000002, 1.84878451995, 32973.29684898851],
    [0.00000000003, 5.15950079042, 134.35286706851],
    [0.00000000002, 5.35359251167, 78484.36588464488],
    [0.00000000002, 4.844594933, 50373.67810991009],
    [0.00000000003, 1.01446892629, 246114.03618995566],
    [0.00000000002, 0.53517853304, 19336.61848374489],
    [0.00000000002, 1.40171752369, 25014.53793486689],
    [0.00000000002, 5.17281822358, 156534.7762139295],
    [0.00000000003, 2.73574689557, 78115.87451777978],
    [0.00000000002, 4.99251162267, 51760.49761001979],
    [0.00000000002, 2.81513963677, 25867.24668165189],
    [0.00000000002, 4.97557986159, 26089.14379679899],
    [0.00000000002, 3.55523971481, 30486.3216456317],
    [0.00000000002, 5.24997796999, 21689.9722724837],
    [0.00000000003, 1.74089824235, 78112.90557236319],
    [0.00000000002, 2.79225536164, 1898.5950354231],
    [0.00000000002, 3.64384685304, 235746.97183325986],
    [0.00000000002, 3.14876741131, 26151.8828573611],
    [0.00000000002, 5.65645027349, 26024.4110607543],
    [0.00000000002, 1.05800481517, 50049.68505828569],
    [0.00000000003, 2.73644560356, 42116.5433649057],
    [0.00000000002, 5.11212517082, 61165.51780606429],
    [0.00000000002, 5.88527469971, 249268.72327485125],
    [0.00000000002, 2.69366265342, 184526.76529172008],
    [0.00000000003, 4.49394290972, 26226.6644559284],
    [0.00000000003, 4.31127477508, 25949.629462187],
    [0.00000000002, 5.99028756442, 223180.33249831005],
    [0.00000000002, 2.84869491083, 223180.82013327704],
    [0.00000000003, 0.50210111414, 65851.58035270809],
    [0.00000000002, 1.7661734374, 4525.8989947425],
    [0.00000000003, 0.33246489326, 26376.0348191275],
    [0.00000000003, 2.18956748436, 25800.2590989879],
    [0.00000000002, 2.76517897745, 26049.52628845289],
    [0.00000000002, 3.57038365323, 4398.41850405751],
    [0.00000000003, 2.22716383153, 23581.5019948011],
    [0.00000000003, 0.29486854609, 28594.7919233143],
    [0.00000000002, 1.98440604953, 1593.2488660304],
    [0.00000000002, 4.71041878186, 78267.34694259708],
    [0.00000000002, 2.49584762828, 54508.7588585369],
    [0.00000000002, 5.8825740455, 78476.76470267709],
    [0.00000000002, 5.12850312405, 1280.0383901115],
    [0.00000000002, 2.67253805962, 35077.12702952309],
    [0.00000000003, 6.14642740727, 26124.79552198719],
    [0.00000000003, 2.65879027753, 26051.4983961282],
    [0.00000000002, 3.30021458746, 158745.93213614845],
    [0.00000000002, 3.91497249728, 52367.49836674349],
    [0.00000000002, 1.49263134542, 41520.61024889929],
    [0.00000000002, 2.56976964633, 51950.2208322217],
    [0.00000000002, 0.98860870622, 28133.4554918599],
    [0.00000000002, 1.5334236714, 24042.8384262555],
    [0.00000000003, 0.60080693478, 51753.38406301899],
    [0.00000000003, 4.58119790245, 25633.23759253039],
    [0.00000000003, 4.22401978235, 26543.05632558499],
    [0.00000000002, 2.40433125154, 24999.54380245671],
    [0.00000000002, 0.11770112608, 27176.75011565869],
    [0.00000000002, 1.87923904841, 309.0345051723],
    [0.00000000002, 0.8335873504, 1155.6049748905],
    [0.00000000002, 5.05439501768, 236702.57157486846],
    [0.00000000002, 4.57470028824, 76887.69180739328],
    [0.00000000002, 5.69921176024, 4084.2323241879],
    [0.00000000002, 3.16153790522, 24601.67920302549],
    [0.00000000002, 4.37985667611, 27818.78167702329],
    [0.00000000002, 3.83767204936, 2198.8435258035],
    [0.00000000002, 2.96055155756, 24292.8885153367],
    [0.00000000002, 3.1565981141, 22759.5236678105],
    [0.00000000002, 1.3412271446, 27143.5967359838],
    [0.00000000002, 3.27620714425, 25973.22003540546],
    [0.00000000002, 1.71257292852, 10021.5934626159],
    [0.00000000002, 6.23156121709, 20618.2631760171],
    [0.00000000002, 2.57365646771, 31558.0307420983],
    [0.00000000002, 0.76870131372, 2854.8841913937],
    [0.00000000002, 0.41751652575, 51953.18977763829],
    [0.00000000002, 1.98684490521, 51951.21766996299],
    [0.00000000002, 0.00103411994, 52249.34722649089],
    [0.00000000002, 3.27898093725, 138633.54722359608],
    [0.00000000002, 3.56496173333, 225687.46509753366],
    [0.00000000002, 3.13338598533, 138319.36104372647],
    [0.00000000002, 3.7604613639, 32768.88417749029],
    [0.00000000002, 5.04336913197, 24079.5894198987],
    [0.00000000002, 3.14356989843, 52202.3484204317],
    [0.00000000002, 0.2575353838, 28206.42318446909],
    [0.00000000002, 3.39136790755, 180496.80194812448],
    [0.00000000002, 0.02421731187, 78259.58427188109],
    [0.00000000002, 3.85481165639, 26624.46383618609],
    [0.00000000002, 4.79199372149, 23549.8984548041],
    [0.00000000002, 1.94407126016, 26293.84487252789],
    [0.00000000002, 1.12674295858, 4601.70630147949],
    [0.00000000002, 4.65935637649, 21716.2705922835],
    [0.00000000002, 2.09856828971, 330.8627811417],
    [0.00000000002, 3.086590986, 51219.27330969429],
    [0.00000000002, 0.33777720887, 78256.35206023828],
    [0.00000000002, 5.15360975027, 50063.91215228729],
    [0.00000000002, 2.99279377683, 132658.02899457427],
    [0.00000000002, 1.71072737383, 96.2230447013],
    [0.00000000002, 5.95938200395, 1265.32366114289],
    [0.00000000002, 0.92029934107, 52823.0609339467],
    [0.00000000002, 2.83880526955, 78270.57915423988],
    [0.00000000002, 0.69832785802, 7392.21058460129],
    [0.00000000002, 2.67350091104, 61165.03017109729],
    [0.00000000002, 3.72029671343, 2544.4288194089],
    [0.00000000002, 3.54241730321, 26421.5152648601],
    [0.00000000002, 6.04496787393, 2655.8121899573],
    [0.00000000002, 5.50264063039, 24705.9490265731],
    [0.00000000002, 3.30257705441, 27470.3448915423],
    [0.00000000002, 1.43501438033, 1353.5049275333],
    [0.00000000002, 4.83145382265, 1603.5438067689],
    [0.00000000002, 5.03780638681, 40738.45907867528],
    [0.00000000002, 4.14425166593, 30460.0233258319],
    [0.00000000002, 5.87281396, 4578.4956343421],
    [0.00000000002, 1.71607024251, 78113.90241010448],
    [0.00000000002, 2.62817899928, 32839.1877994035],
    [0.00000000002, 4.84613238692, 14297.5178703989],
    [0.00000000002, 3.95908529788, 37878.7760477165],
    [0.00000000002, 4.63463254085, 104501.41958091488],
    [0.00000000002, 4.18177446903, 25138.48371512089],
    [0.00000000002, 5.77634249731, 44131.52503670349],
    [0.00000000002, 5.67506076203, 104358.48229581409],
    [0.00000000002, 3.82438567775, 23336.5993593661],
    [0.00000000002, 0.68279302416, 23336.11172439909],
    [0.00000000002, 1.33260638073, 224.1009782184],
    [0.00000000002, 2.06879035628, 51547.19851458179],
    [0.00000000002, 4.73770456468, 202.0095776906],
    [0.00000000002, 1.59611191109, 202.4972126576],
    [0.00000000002, 4.68695414047, 31108.06544647091],
    [0.00000000002, 4.11826354432, 21068.2284716445],
    [0.00000000002, 4.53666662059, 117076.82218358829],
    [0.00000000002, 4.53666662059, 117077.30981855528],
    [0.00000000002, 0.67052215512, 24814.97829846349],
    [0.00000000002, 0.41491214788, 27299.4880294167],
    [0.00000000002, 2.10712022974, 24876.8058886987],
    [0.00000000002, 4.40848896505, 26086.17485138239],
    [0.00000000002, 4.17219070503, 105418.35186097029],
    [0.00000000002, 1.12019984719, 49534.7088221597],
    [0.00000000002, 2.68381144033, 107679.99204006046],
    [0.00000000002, 6.14277431051, 19337.1061187119],
    [0.00000000002, 0.23628622399, 24957.9930114719],
    [0.00000000002, 2.28574615363, 27218.3009066435],
    [0.00000000002, 5.03978204688, 66826.36222024946],
    [0.00000000002, 1.54597568017, 27257.7352104663],
    [0.00000000002, 3.11893314385, 26197.86564531009],
    [0.00000000002, 3.83163915021, 151199.6989235789],
    [0.00000000002, 0.84426255302, 426.1525939975],
    [0.00000000002, 3.62580652226, 76784.59903317469],
    [0.00000000002, 0.46652350366, 179172.50322857045],
    [0.00000000002, 4.60919202058, 168959.21768235945],
    [0.00000000002, 1.46759936699, 168959.70531732647],
    [0.00000000002, 1.33905329827, 7829.84871395129],
    [0.00000000002, 4.50925409872, 151975.22153490287],
    [0.00000000002, 3.9953048524, 20235.36664379391],
    [0.00000000002, 4.8099128324, 31940.9272743215],
    [0.00000000002, 5.05502953319, 1585.38455950421],
    [0.00000000002, 4.82744008834, 76.0222537921],
    [0.00000000002, 6.07753628311, 1581.7155307995],
    [0.00000000002, 5.83182532562, 52643.5274560193],
    [0.00000000002, 5.61086631842, 130433.13096645445],
    [0.00000000002, 3.78215414688, 79956.11891170849],
    [0.00000000002, 2.95202880616, 190809.35350674443],
    [0.00000000002, 0.51510001678, 155417.79647986827],
    [0.00000000002, 3.82552098141, 58219.79104704029],
    [0.00000000002, 4.10273299229, 299399.2210251974],
    [0.00000000002, 5.54210405976, 51738.40620949199],
    [0.00000000002, 1.39992677247, 2045.5523502857],
    [0.00000000002, 2.83807224501, 27953.3783615753],
    [0.00000000002, 5.96714543979, 24222.9155565401],
    [0.00000000002, 6.18845161198, 164721.45036517028],
    [0.00000000002, 4.74202892331, 28441.0131128295],
    [0.00000000002, 4.06318876149, 23735.2808052859],
    [0.00000000002, 3.36973154287, 26948.4568878105],
    [0.00000000002, 5.43548614193, 25227.83703030489],
    [0.00000000002, 3.83932556111, 148532.64658993747],
    [0.00000000002, 0.69773290752, 148533.13422490444],
    [0.00000000002, 3.08932581659, 77307.17645126847],
    [0.00000000002, 4.53508525261, 191.6920835951],
    [0.00000000002, 1.91266463584, 23976.00901071309],
    [0.00000000002, 2.51070394013, 206370.27255720508],
    [0.00000000002, 3.48548328265, 4268.3379956771],
    [0.00000000002, 0.2707197221, 23962.2695516785],
    [0.00000000002, 3.41231237569, 23961.78191671149],
    [0.00000000002, 2.77965182012, 3776.6747032183],
    [0.00000000002, 0.63445271713, 24918.55870764909],
    [0.00000000002, 4.78488159185, 102769.40940053028],
    [0.00000000002, 0.55778477986, 25889.0749576213],
    [0.00000000002, 1.96424759776, 26287.21896049409],
    [0.00000000002, 3.23447204926, 2648.2110079895],
    [0.00000000002, 4.14592395979, 80432.71372448868],
    [0.00000000002, 1.34549805675, 13989.9602494293],
    [0.00000000002, 1.17653432087, 38186.3336686861],
    [0.00000000002, 2.04577034444, 8194.5191506921],
    [0.00000000002, 5.70902071155, 237009.641560871],
    [0.00000000002, 3.82569277203, 24863.84148331209],
    [0.00000000002, 5.50674253073, 76064.86589891909],
    [0.00000000002, 1.39914737585, 71492.75500599349],
    [0.00000000002, 6.18696209768, 30831.5487222281],
    [0.00000000002, 2.61825558712, 21344.7451958873],
    [0.00000000002, 1.07023698053, 124663.98818751707],
    [0.00000000001, 5.98706010174, 101702.91392334028],
    [0.00000000002, 1.3547398224, 105404.12476696869],
    [0.00000000002, 3.48042408913, 307.31380348609],
    [0.00000000002, 5.91402019226, 184834.32291268965],
    [0.00000000002, 5.91402019226, 184833.8352777226],
    [0.00000000001, 0.49434611754, 124156.19604039608],
    [0.00000000001, 4.86177343922, 22909.51353352309],
    [0.00000000001, 1.72018078563, 22910.0011684901],
    [0.00000000001, 5.79706734, 958.87904247409],
    [0.00000000002, 2.31704185815, 77196.97013004909],
    [0.00000000002, 4.18763806284, 9591.29792788829],
    [0.00000000002, 2.60184968404, 189385.78877478145],
    [0.00000000001, 5.29048508788, 24919.2481220111],
    [0.00000000001, 3.51473259692, 27257.0457961043],
    [0.00000000002, 5.03520614299, 25440.64849077589],
    [0.00000000001, 5.16795059538, 26010.3964150738],
    [0.00000000002, 5.13757006415, 43693.8869073535],
    [0.00000000002, 5.04394896979, 25014.05029989989],
    [0.00000000001, 3.77902331302, 9385.0848255587],
    [0.00000000002, 6.17372295311, 26202.09861277591],
    [0.00000000001, 3.35135060198, 52499.55551728929],
    [0.00000000002, 5.03234764639, 14650.55593710108],
    [0.00000000002, 0.37520258538, 78690.06379811508],
    [0.00000000001, 1.65843797188, 5039.34443082949],
    [0.00000000002, 2.53532060227, 2214.98690507971],
    [0.00000000001, 5.07384686444, 77211.19722405069],
    [0.00000000001, 4.11905908237, 233202.29919636747],
    [0.00000000002, 3.92094587643, 21516.52370109911],
    [0.00000000002, 4.88427180837, 30659.77021701629],
    [0.00000000002, 0.59200954056, 621.49998335569],
    [0.00000000002, 2.70800261719, 25764.15390743329],
    [0.00000000001, 3.75051661568, 26.5421372833],
    [0.00000000001, 3.87625546504, 226796.35601466],
    [0.00000000001, 3.87625546504, 226796.84364962706],
    [0.00000000002, 5.04685227536, 28839.69455874929],
    [0.00000000002, 3.93268001276, 102225.97897640108],
    [0.00000000002, 6.27298790851, 129971.79453500008],
    [0.00000000002, 5.63544803962, 27139.92770727909],
    [0.00000000001, 1.05389010615, 50807.38984778689],
    [0.00000000001, 1.450676455, 78187.19953596349],
    [0.00000000002, 3.49292360736, 51472.41691601449],
];

const Y1: &[Term] = &[
    [0.00328639517, 4.46949126315, 0.2438174835],
    [0.00106107047, 4.34458837257, 52176.0501006319],
    [0.0003244844, 1.11324531456, 78263.95324220609],
    [0.00009699418, 0.7169694502, 26087.65932409069],
    [0.0000880849, 4.16435393159, 104351.8563837803],
    [0.00004833058, 4.93174326512, 26088.1469590577],
    [0.00002334329, 0.93209482754, 130439.75952535449],
    [0.0000089025, 4.18838297765, 52175.56246566489],
    [0.00000615643, 3.98294823708, 156527.6626669287],
    [0.00000147225, 1.38491342638, 78263.46560723908],
    [0.0000016246, 0.75058057907, 182615.56580850287],
    [0.00000069502, 1.3485995523, 24978.7684069643],
    [0.00000063529, 1.17140322075, 27197.5255111511],
    [0.00000042967, 3.80137602608, 208703.46895007708],
    [0.00000032514, 4.7551567879, 104351.36874881329],
    [0.00000017597, 4.40134253408, 51066.6715485385],
    [0.00000013287, 4.22067115617, 53285.4286527253],
    [0.00000011758, 1.75773369521, 1109.1347346099],
    [0.00000012502, 6.11835337393, 1059.6257476727],
    [0.00000011468, 5.06247506599, 20426.8149099055],
    [0.00000011394, 0.56897531807, 234791.37209165128],
    [0.00000008221, 3.74149753253, 31749.4790082099],
    [0.00000008067, 1.73031128392, 130439.27189038748],
    [0.00000006176, 3.89018803821, 4552.1973145423],
    [0.00000004784, 4.97654366187, 21536.1934619989],
    [0.00000004858, 1.16998032311, 77154.57469011268],
    [0.00000004269, 1.82558089427, 46514.7180514797],
    [0.00000004412, 3.53054557745, 25132.5472174491],
    [0.00000003922, 0.8089933969, 1589.3167127673],
    [0.00000004017, 2.84593275079, 27147.5288892469],
    [0.00000003763, 2.60830060517, 14765.48286075331],
    [0.00000004285, 2.70027245882, 51116.6681704427],
    [0.00000003901, 5.26131971011, 27043.7467006663],
    [0.00000003221, 5.81041475267, 26617.8379241523],
    [0.0000000308, 3.11167500886, 25558.4559939631],
    [0.0000000303, 3.61976417137, 260879.27523322543],
    [0.00000002907, 4.9428304835, 26068.47719815791],
    [0.00000002906, 3.86228296506, 26107.81671995749],
    [0.00000002383, 0.50751116011, 26084.2656236997],
    [0.00000002381, 2.01445897738, 26092.0282944157],
    [0.00000002069, 6.19366221907, 37410.8110573621],
    [0.00000002028, 3.87421613919, 30640.1004561165],
    [0.00000002088, 4.91615750193, 156527.17503196167],
    [0.00000001998, 0.93225615522, 79373.33179429949],
    [0.0000000188, 4.93819019021, 47624.0966035731],
    [0.0000000158, 0.12078980001, 9104.1508116011],
    [0.00000001575, 5.88747787298, 955.3559241251],
    [0.00000001508, 5.1479877154, 19317.43635781211],
    [0.00000001397, 4.87619009368, 72602.62119305388],
    [0.00000001363, 1.71613837922, 50586.97720534809],
    [0.00000001495, 2.20742717983, 12566.3955174663],
    [0.00000001401, 0.47782643773, 426.8420083595],
    [0.00000001215, 2.36706136703, 52705.7410657265],
    [0.0000000131, 0.91525566474, 26095.2605060585],
    [0.00000001272, 1.65165069758, 26081.03341205689],
    [0.00000001476, 1.42289389144, 23869.3898548709],
    [0.00000001169, 3.92032031637, 3442.81876244891],
    [0.00000001103, 5.93142816578, 53235.43203082109],
    [0.00000001375, 4.22153989222, 103242.47783168689],
    [0.00000001244, 0.2542220149, 51220.4503590233],
    [0.00000001238, 1.09570749211, 28306.90406324449],
    [0.00000000967, 2.00095625807, 53131.6498422405],
    [0.00000000986, 3.65234674915, 32858.8575603033],
    [0.00000000911, 5.86347762782, 529.44714761109],
    [0.00000000859, 5.65763791955, 40853.3860023275],
    [0.00000000855, 3.76170634741, 27677.2198543415],
    [0.00000000844, 5.74887533238, 25874.8478636197],
    [0.00000001042, 4.90279640329, 22645.57201409229],
    [0.00000000924, 5.45463398257, 640.1411037975],
    [0.0000000081, 3.07111874736, 26301.4460544957],
    [0.00000000807, 0.38735610376, 286967.1783747996],
    [0.00000000875, 0.56063513084, 83925.28529135829],
    [0.00000000874, 3.97964673458, 529.9347825781],
    [0.00000000821, 3.19953070235, 36301.4325052687],
    [0.00000000823, 0.48663689329, 11322.42028082089],
    [0.00000000738, 0.62901815542, 56728.0035976907],
    [0.00000000724, 6.21294643252, 18849.4713674577],
    [0.00000000714, 4.24977924185, 6770.46678376209],
    [0.00000000667, 2.40282291967, 43072.1431065143],
    [0.00000000665, 1.71193023872, 52156.38033973211],
    [0.00000000893, 1.99786430454, 27197.03787618409],
    [0.00000000752, 0.31686311777, 39609.8984006491],
    [0.00000000673, 3.242364336, 1052.51220067191],
    [0.00000000688, 5.5727394698, 15874.8614128467],
    [0.00000000618, 0.55635839524, 5661.5758666357],
    [0.00000000808, 2.76566323402, 1066.7392946735],
    [0.00000000616, 5.41694945887, 51646.3591355373],
    [0.0000000065, 6.10338500409, 25028.7650288685],
    [0.0000000055, 1.77567872746, 182615.07817353585],
    [0.00000000554, 1.44404571039, 2119.00767786191],
    [0.00000000535, 5.07158844336, 52179.9314359899],
    [0.00000000657, 3.92169541273, 29530.7219040231],
    [0.00000000527, 3.36241476084, 26514.7451499337],
    [0.00000000502, 5.23707918628, 38654.2986590405],
    [0.00000000568, 1.89274232427, 24978.28077199729],
    [0.00000000498, 2.9445819459, 63498.71419893629],
    [0.00000000469, 3.5859629824, 110013.18843293248],
    [0.00000000521, 0.62400943535, 52195.71986153169],
    [0.0000000044, 1.64399949118, 98690.52433462809],
    [0.0000000058, 4.69289380268, 7.3573644843],
    [0.00000000438, 2.54950574588, 33326.8225506577],
    [0.0000000053, 1.70361729355, 2218.51328670329],
    [0.00000000483, 2.07663666251, 51749.45190975589],
    [0.00000000434, 3.55771117131, 52172.1687652739],
    [0.00000000408, 3.22512461303, 7238.4317741165],
    [0.0000000039, 5.33070151567, 78793.64420730069],
    [0.00000000374, 0.44775435653, 58946.76070187749],
    [0.00000000404, 4.44096026376, 52168.93655363109],
    [0.00000000356, 6.23046854548, 62389.33564684289],
    [0.00000000373, 5.69827259585, 103292.47445359109],
    [0.00000000326, 2.72823636104, 79323.33517239528],
    [0.00000000393, 0.9897234495, 129330.38097326108],
    [0.00000000385, 3.94475257678, 52183.1636476327],
    [0.00000000316, 4.54068234172, 76674.88034692229],
    [0.0000000039, 4.17402259459, 54394.80720481869],
    [0.00000000323, 4.47818749821, 49957.2929964451],
    [0.00000000299, 3.00180406182, 16983.75232997309],
    [0.00000000328, 2.4778450361, 68050.66769599509],
    [0.00000000314, 3.3492778534, 51536.15281431789],
    [0.00000000367, 3.28176962437, 77308.35350059748],
    [0.00000000316, 1.9212398421, 45405.3394993863],
    [0.00000000319, 2.66908913597, 13656.10430865991],
    [0.00000000266, 4.93516999025, 48733.47515566649],
    [0.00000000289, 1.34161862787, 6.86972951729],
    [0.00000000261, 2.4310465491, 16984.2399649401],
    [0.00000000261, 6.20453445714, 52389.3491960699],
    [0.00000000233, 5.55470184122, 51123.7817174435],
    [0.00000000231, 3.67240300147, 82815.90673926489],
    [0.00000000239, 1.23297150719, 213.5429129215],
    [0.00000000222, 2.42341131487, 66941.2891439017],
    [0.00000000216, 3.4385777088, 313055.08151637384],
    [0.00000000276, 6.0373692882, 51109.55462344189],
    [0.00000000222, 1.79769065581, 32371.2228090491],
    [0.00000000198, 0.48217448832, 53765.1229959157],
    [0.00000000197, 5.45332171285, 69160.04624808849],
    [0.00000000196, 1.08031906323, 50057.2862402535],
    [0.00000000202, 2.45524349258, 129380.37759516528],
    [0.00000000201, 2.89680722301, 44937.3745090319],
    [0.00000000216, 3.72207636306, 213.0552779545],
    [0.00000000185, 0.3449990957, 136101.0915745067],
    [0.00000000183, 0.69231889541, 419.72846135871],
    [0.00000000186, 5.71673843636, 57837.3821497841],
    [0.00000000178, 3.70090079088, 105461.23493587368],
    [0.00000000177, 2.18468434488, 51962.7510051939],
    [0.0000000017, 4.76419946756, 78244.2834813063],
    [0.00000000229, 0.17271876456, 433.9555553603],
    [0.00000000173, 5.50271484365, 94138.57083756929],
    [0.00000000157, 2.02010274317, 64742.2018006147],
    [0.00000000153, 5.58836484297, 59414.7256922319],
    [0.00000000159, 4.59819683221, 853.4401992355],
    [0.00000000155, 3.11896173244, 35192.0539531753],
    [0.00000000149, 5.04913257055, 24499.0740637739],
    [0.00000000152, 1.43713086803, 4551.7096795753],
    [0.00000000147, 0.1366119571, 52602.6482915079],
    [0.00000000147, 0.58488249671, 19805.0711090663],
    [0.00000000182, 0.68589997649, 55618.6250455973],
    [0.0000000014, 4.81668277749, 23754.95056618569],
    [0.00000000146, 4.89226138375, 208702.98131511008],
    [0.00000000154, 1.81985059116, 99799.90288672148],
    [0.00000000139, 4.63018939309, 25973.70767037247],
    [0.00000000138, 4.17371703563, 26202.58624774291],
    [0.00000000191, 2.30404978778, 26728.0442453717],
    [0.00000000152, 4.17149146165, 1109.6223695769],
    [0.00000000162, 6.13333012195, 38520.1896094555],
    [0.00000000141, 5.95496888155, 77734.26227711148],
    [0.00000000135, 1.84463199555, 78267.83457756409],
    [0.00000000128, 2.99907290513, 88477.23878841709],
    [0.00000000147, 0.62089024684, 31748.99137324289],
    [0.00000000135, 4.69617813235, 124778.42747620228],
    [0.00000000148, 5.85857347873, 27154.6424362477],
    [0.00000000134, 0.4560180382, 12431.79883291429],
    [0.00000000121, 2.04615713494, 104881.54734887488],
    [0.00000000116, 3.19167458045, 25934.3681485729],
    [0.00000000116, 4.22027620935, 32858.36992533629],
    [0.00000000115, 5.61211222559, 26241.9257695425],
    [0.00000000148, 5.73338066299, 25661.5487681817],
    [0.0000000011, 4.42886613408, 28206.9108194361],
    [0.00000000108, 0.11698734549, 27140.41534224609],
    [0.00000000115, 2.44781109373, 103822.16541868569],
    [0.00000000109, 5.49669317005, 53284.94101775829],
    [0.00000000107, 3.99865946781, 28421.3433519297],
    [0.00000000143, 3.36395963187, 1596.43025976811],
    [0.00000000112, 4.03868201051, 155418.2841148353],
    [0.00000000113, 0.89157360809, 5327.7199258663],
    [0.00000000101, 1.94476004771, 25620.1819687033],
    [0.00000000122, 1.46662898961, 10213.5293636945],
    [0.00000000102, 3.99402750542, 2333.44021035551],
    [0.00000000097, 0.57476621767, 26556.11194941211],
    [0.00000000118, 0.18981536711, 7994.77225950771],
    [0.00000000109, 0.03572167179, 103396.25664217169],
    [0.00000000109, 4.54205508167, 79219.55298381469],
    [0.00000000095, 4.81791418885, 58459.1259506233],
    [0.00000000095, 1.17289793021, 78256.83969520529],
    [0.00000000097, 5.79863208794, 105411.23831396949],
    [0.00000000092, 3.83355549192, 10213.0417287275],
    [0.00000000094, 2.84811066413, 1582.2031657665],
    [0.00000000103, 3.37710316075, 91785.70468379749],
    [0.00000000101, 5.05588975902, 20426.32727493849],
    [0.00000000089, 1.67320799366, 74821.37829724069],
    [0.00000000089, 4.81402637705, 125887.80602829569],
    [0.00000000103, 5.07765700675, 51066.18391357149],
    [0.00000000087, 5.9343979546, 27043.2590656993],
    [0.00000000083, 1.05061824879, 73711.99974514729],
    [0.00000000083, 0.20717662715, 77624.05595589208],
    [0.00000000097, 3.79624621564, 71980.8773922147],
    [0.00000000081, 5.50420619898, 155468.28073673949],
    [0.0000000008, 5.57436544726, 22645.08437912529],
    [0.00000000081, 1.24551992048, 76045.1961380193],
    [0.00000000081, 3.47212148199, 26138.1435809619],
    [0.0000000008, 5.32926891572, 26038.1503371535],
    [0.00000000104, 0.71084047438, 78271.06678920689],
    [0.00000000103, 3.66294929279, 78283.62300310588],
    [0.00000000083, 0.93556744308, 80482.71034639288],
    [0.00000000089, 0.32257506891, 78260.07190684808],
    [0.00000000073, 5.79066657626, 26617.35028918529],
    [0.00000000077, 5.23137947798, 18208.05780571871],
    [0.00000000082, 2.34137394607, 77211.68485901768],
    [0.00000000077, 1.31837686051, 41962.7645544209],
    [0.00000000082, 2.81188130706, 77197.45776501608],
    [0.00000000067, 3.45344753309, 85034.66384345168],
    [0.0000000007, 5.80811525915, 537.0483295789],
    [0.00000000067, 1.90240647027, 5661.0882316687],
    [0.00000000067, 2.25742587365, 120226.47397914348],
    [0.00000000065, 3.38772930583, 162188.99471608087],
    [0.00000000075, 3.3624688711, 149.8070146181],
    [0.00000000071, 0.43774462141, 108903.8098808391],
    [0.00000000063, 1.71956484187, 51756.5654567567],
    [0.00000000062, 0.86384103129, 102762.78348849648],
    [0.00000000067, 2.9299503533, 64608.09275102969],
    [0.00000000064, 3.59312937724, 13521.9952590749],
    [0.00000000062, 1.70048284317, 28306.41642827749],
    [0.00000000058, 0.05666653789, 11322.9079157879],
    [0.00000000058, 1.8504600291, 24498.58642880689],
    [0.00000000077, 2.22443127486, 25565.5695409639],
    [0.00000000076, 3.03069740917, 78477.2523376441],
    [0.00000000063, 5.48328560721, 93029.19228547589],
    [0.00000000078, 4.97356487718, 71493.2426409605],
    [0.00000000077, 2.34741649134, 51742.33836275509],
    [0.00000000057, 2.02149140578, 2648.6986429565],
    [0.00000000058, 0.20352146431, 339142.984657948],
    [0.00000000056, 3.96222140968, 76145.18938182769],
    [0.00000000059, 1.23567785929, 21535.70582703189],
    [0.00000000056, 0.13198299548, 117873.60782537168],
    [0.00000000053, 6.21797647818, 25557.96835899609],
    [0.0000000006, 5.92257554155, 71025.27765060609],
    [0.00000000052, 5.28001264458, 10022.0810975829],
    [0.00000000055, 4.20817850068, 51322.85371887989],
    [0.00000000058, 2.97195320983, 43071.65547154729],
    [0.00000000053, 3.5011592417, 79853.02613748988],
    [0.00000000053, 4.92881565492, 78050.6541467681],
    [0.00000000053, 0.59227243554, 98068.78053378889],
    [0.00000000057, 5.95602153522, 633.0275567967],
    [0.00000000049, 5.0864636715, 90830.10494218889],
    [0.00000000067, 0.27295012704, 26610.72437715149],
    [0.0000000005, 4.43506318049, 131549.1380774479],
    [0.00000000049, 3.57210369085, 33968.23611239669],
    [0.0000000005, 3.73457689628, 81706.5281871715],
    [0.00000000051, 5.44465818352, 129910.06856025988],
    [0.00000000057, 1.99278813028, 26624.9514711531],
    [0.00000000045, 4.93934477894, 51116.18053547569],
    [0.00000000045, 1.53008615762, 104332.1866228805],
    [0.00000000051, 5.56661489639, 647.25465079831],
    [0.00000000043, 3.21201517479, 78690.55143308209],
    [0.00000000054, 0.68244488765, 522.8212355773],
    [0.00000000042, 6.05067077478, 114565.14192999128],
    [0.00000000041, 0.42167567232, 38519.70197448849],
    [0.00000000041, 5.52226173141, 25028.27739390149],
    [0.00000000052, 5.71899801337, 39744.0074502341],
    [0.00000000043, 5.20652224208, 103925.25819290428],
    [0.00000000045, 3.01197275808, 76.50988875911],
    [0.00000000042, 1.64710245004, 46848.5739922491],
    [0.00000000047, 2.33748031419, 44181.52165860769],
    [0.00000000038, 1.51512405751, 22760.01130277751],
    [0.00000000037, 1.55847676346, 151975.7091698699],
    [0.0000000005, 0.66442193902, 25551.34244696229],
    [0.0000000005, 5.43960666857, 50579.86365834729],
    [0.00000000045, 4.18105807315, 7879.84533585549],
    [0.00000000043, 3.23954616248, 26521.8586969345],
    [0.00000000037, 4.29411552008, 30639.61282114949],
    [0.00000000037, 5.45971389197, 48732.98752069949],
    [0.00000000035, 1.61116129207, 84547.0290921975],
    [0.0000000004, 5.41660085121, 52815.9473869459],
    [0.00000000041, 5.72036408436, 1059.1381127057],
    [0.00000000041, 1.46421286291, 150866.3306177765],
    [0.0000000004, 3.44404714469, 26294.33250749489],
    [0.00000000041, 5.29927149302, 25881.9614106205],
    [0.00000000034, 5.65060802359, 26191.23973327629],
    [0.00000000034, 3.16023657143, 25985.0541848391],
    [0.00000000034, 5.54425040097, 89586.6173405105],
    [0.00000000041, 2.60243509566, 52329.8289111167],
    [0.00000000035, 0.95515596888, 157637.04121902207],
    [0.00000000042, 4.4518150135, 26507.63160293289],
    [0.00000000039, 1.71451949376, 234790.88445668426],
    [0.00000000037, 3.45787318433, 57836.89451481709],
    [0.00000000036, 5.05609057964, 130969.45049044909],
    [0.00000000032, 0.80695926075, 181506.18725640947],
    [0.00000000033, 5.95814421441, 50594.09075234889],
    [0.00000000044, 4.542530022, 6681.46867088311],
    [0.00000000036, 4.89960028584, 104355.73771913828],
    [0.00000000032, 3.07469859082, 129484.15978374588],
    [0.0000000003, 3.6364486822, 52644.0150909863],
    [0.00000000031, 0.98929514792, 29416.28261533789],
    [0.00000000031, 6.01882424612, 105307.45612538888],
    [0.0000000003, 2.14561278666, 95247.94938966268],
    [0.00000000031, 0.94264719675, 52290.48938931711],
    [0.00000000029, 2.26390987562, 181556.1838783137],
    [0.00000000039, 0.22423030716, 25448.2496727437],
    [0.00000000032, 3.17151820552, 51639.24558853649],
    [0.00000000029, 2.64834173157, 53242.5455778219],
    [0.00000000029, 3.82338961652, 25668.6623151825],
    [0.00000000028, 4.61151969244, 77204.5713120169],
    [0.00000000036, 3.92497606168, 25132.0595824821],
    [0.00000000027, 0.76041081814, 54509.2464935039],
    [0.00000000026, 1.38925912724, 52061.61081194667],
    [0.00000000025, 5.15879998687, 29428.7593857575],
    [0.00000000031, 2.93989277053, 18093.13088206649],
    [0.0000000003, 1.42238495741, 26941.3433408097],
    [0.00000000025, 4.73209653345, 956.53297345411],
    [0.00000000027, 2.35402357443, 18093.6185170335],
    [0.00000000028, 3.75976953619, 104358.96993078108],
    [0.00000000026, 0.11444202162, 26237.7101561923],
    [0.00000000024, 3.77280410253, 22747.5345323579],
    [0.00000000024, 2.17839409058, 46514.23041651269],
    [0.00000000029, 2.57773209519, 131499.1414555437],
    [0.00000000024, 3.54215594406, 42154.2128205325],
    [0.00000000024, 1.15126185636, 54294.81396101029],
    [0.00000000023, 5.30608917177, 146314.3771207177],
    [0.00000000024, 4.83980442527, 26107.32908499049],
    [0.00000000026, 2.88358798527, 25021.6514818677],
    [0.00000000023, 2.2565734428, 20760.1832157079],
    [0.00000000023, 1.97184358207, 77154.08705514569],
    [0.00000000024, 5.65078963984, 26067.9895631909],
    [0.00000000023, 2.17997702001, 25035.8785758693],
    [0.00000000023, 3.16772215014, 143961.51096694588],
    [0.00000000026, 0.15726115955, 27684.3334013423],
    [0.00000000022, 5.04032506297, 19804.5834740993],
    [0.00000000025, 1.50229754572, 26080.54577708989],
    [0.00000000023, 1.92683823556, 130013.16133447849],
    [0.00000000022, 2.30233150466, 79372.84415933248],
    [0.00000000025, 5.43362878578, 52026.4869034973],
    [0.00000000021, 4.22122242647, 104344.74283677948],
    [0.00000000021, 4.30076756548, 102133.09927959349],
    [0.00000000023, 6.10522918323, 61279.9570947495],
    [0.00000000021, 0.79325948829, 85502.6288338061],
    [0.00000000023, 4.81952053099, 77844.46859833089],
    [0.00000000022, 0.15814691647, 188276.8978576551],
    [0.00000000021, 3.64905245082, 124156.68367536309],
    [0.00000000027, 5.39563901242, 103299.58800059189],
    [0.0000000002, 1.06151057303, 23968.89546371229],
    [0.00000000023, 5.40249889826, 77830.24150432929],
    [0.00000000021, 5.85984642433, 103285.36090659029],
    [0.0000000002, 0.50079058372, 49527.59527515889],
    [0.0000000002, 0.72105141719, 1479.11039154791],
    [0.0000000002, 4.35275493153, 23969.3830986793],
    [0.0000000002, 3.38833851349, 103711.95909746629],
    [0.00000000019, 2.0811118065, 52126.05347872769],
    [0.00000000019, 1.62003983896, 3327.89183879669],
    [0.00000000022, 6.13482771447, 104565.15547921829],
    [0.00000000026, 5.97213001267, 13362.6935242827],
    [0.00000000025, 4.72474160158, 24864.32911827909],
    [0.00000000023, 5.79095805909, 15874.37377787969],
    [0.00000000022, 3.15825920598, 6283.3196674749],
    [0.00000000025, 4.07847502844, 27311.96479983631],
    [0.00000000019, 3.21308432623, 53228.31848382029],
    [0.00000000021, 1.74197598839, 97581.14578253469],
    [0.00000000018, 3.99624752196, 106570.61348796709],
    [0.00000000021, 0.35167836404, 60056.13925397089],
    [0.00000000019, 1.46314564325, 26083.7779887327],
    [0.00000000021, 0.41713451843, 104371.52614468009],
    [0.00000000017, 0.901895982, 1162.7185218913],
    [0.0000000002, 5.87845266961, 41962.27691945389],
    [0.0000000002, 2.74404571866, 26091.5406594487],
    [0.00000000017, 1.01839175808, 77410.75686045409],
    [0.00000000018, 6.27803384892, 115674.52048208468],
    [0.00000000021, 3.48125971513, 134991.71302241329],
    [0.00000000017, 1.53092891578, 104138.55728834229],
    [0.00000000017, 0.95709459823, 37410.32342239509],
    [0.00000000019, 0.82226099482, 522.3336006103],
    [0.00000000019, 3.3475414293, 52698.62751872569],
    [0.00000000019, 2.3526040617, 131395.3592669631],
    [0.00000000016, 2.759614922, 12546.72575656651],
    [0.00000000016, 4.65532135428, 100909.28143881488],
    [0.00000000016, 5.53845756469, 25867.73431661889],
    [0.0000000002, 1.18563577372, 26094.77287109149],
    [0.00000000018, 0.37484030344, 47623.60896860609],
    [0.00000000018, 6.16926211843, 12432.2864678813],
    [0.0000000002, 4.56182116076, 11610.7957758577],
    [0.00000000015, 3.94554558708, 183724.9443605963],
    [0.00000000017, 3.22546612448, 51529.03926731709],
    [0.0000000002, 3.34083321292, 426.3543733925],
    [0.00000000016, 3.3391363874, 26308.5596014965],
    [0.00000000016, 3.22684879906, 128850.68663007069],
    [0.00000000019, 2.99415679113, 51543.2663613187],
    [0.00000000019, 2.17719175975, 155997.9717018341],
    [0.00000000015, 6.05463333824, 26164.4130303333],
    [0.00000000018, 5.23520259945, 25874.36022865269],
    [0.00000000014, 3.61282271417, 36300.94487030169],
    [0.00000000019, 4.31362944396, 45494.82524723229],
    [0.00000000014, 2.00836472375, 44295.9609472929],
    [0.00000000018, 2.25014922269, 119117.0954270501],
    [0.00000000016, 2.19192842111, 76667.76679992149],
    [0.00000000014, 0.50039602119, 107794.43132874569],
    [0.00000000014, 3.93894618332, 16065.82204399129],
    [0.00000000014, 2.90301858576, 44181.03402364069],
    [0.00000000014, 3.19306372116, 2111.8941308611],
    [0.00000000015, 0.17179065008, 52226.0467225361],
    [0.00000000014, 3.19364287125, 27999.3464422749],
    [0.00000000019, 3.37439513975, 104347.97504842229],
    [0.00000000014, 1.8595347916, 116918.00808376308],
    [0.00000000015, 3.25430509963, 365230.88779952226],
    [0.00000000016, 4.96959083935, 52712.85461272729],
    [0.00000000017, 2.67262744895, 97113.18079218028],
    [0.00000000013, 5.63989609373, 24176.9474758405],
    [0.00000000017, 1.530284657, 20760.6708506749],
    [0.00000000014, 5.20815151417, 25954.0379094727],
    [0.00000000014, 3.59706617063, 26222.2560086427],
    [0.00000000017, 5.41745483095, 70269.42480018188],
    [0.00000000013, 4.59923088636, 178063.6123114441],
    [0.00000000015, 5.79226796194, 52099.7840293563],
    [0.00000000013, 2.11885842073, 323.74923414091],
    [0.00000000013, 3.19236461837, 39609.41076568209],
    [0.00000000013, 5.09373061293, 206.42936592071],
    [0.00000000014, 0.2505477938, 105940.92927906409],
    [0.00000000013, 0.63576827663, 102233.09252340188],
    [0.00000000014, 2.1833949814, 77204.08367704989],
    [0.00000000014, 2.15110849472, 13521.50762410789],
    [0.00000000013, 3.12239387096, 111590.53197538029],
    [0.00000000012, 2.70622746349, 76681.99389392308],
    [0.00000000015, 5.99891720563, 27670.10630734069],
    [0.00000000013, 4.07441974716, 58946.27306691049],
    [0.00000000015, 3.57873341293, 26300.95841952869],
    [0.00000000013, 4.88571694871, 14477.1073657165],
    [0.00000000013, 5.78266274868, 1692.40948698591],
    [0.00000000013, 2.82188552462, 140653.0450715655],
    [0.00000000012, 6.05506602553, 52072.9573264133],
    [0.00000000012, 1.55236651979, 54394.31956985169],
    [0.00000000012, 5.88344203293, 7238.9194090835],
    [0.00000000012, 0.69684033021, 25447.76203777669],
    [0.00000000012, 4.63793697276, 72936.4771338233],
    [0.00000000015, 3.92235876661, 2126.1212248627],
    [0.00000000012, 4.09664422947, 55504.18575691209],
    [0.00000000012, 2.03928728821, 220.6564599223],
    [0.00000000012, 0.18923872919, 111122.56698502589],
    [0.00000000012, 5.93822601178, 90695.99589260388],
    [0.00000000012, 6.27891147429, 104778.45457465628],
    [0.00000000012, 0.41458906078, 64607.60511606269],
    [0.00000000012, 4.674559968, 110634.93223377169],
    [0.00000000011, 2.00000784368, 36109.9842391571],
    [0.00000000013, 4.96093660073, 49842.85370775989],
    [0.00000000014, 5.7477255493, 78417.73205269089],
    [0.00000000011, 1.10539607022, 26198.3532802771],
    [0.00000000011, 1.4166363074, 25977.94063783829],
    [0.00000000012, 3.63665690282, 31415.6230674405],
    [0.00000000012, 3.7897770063, 6770.9544187291],
    [0.00000000011, 2.54959001341, 51969.8645521947],
    [0.0000000001, 2.10136723403, 23868.9022199039],
    [0.00000000012, 4.58411493514, 130420.0897644547],
    [0.00000000014, 1.09052029316, 32769.3718124573],
    [0.00000000013, 4.14764183344, 33967.74847742969],
    [0.00000000011, 2.20920470312, 51645.87150057029],
    [0.0000000001, 5.01452989749, 28736.6017845307],
    [0.0000000001, 2.60659223197, 52705.25343075949],
    [0.00000000014, 3.63437988054, 77837.35505133009],
    [0.0000000001, 2.9112429448, 141762.4236236589],
    [0.00000000012, 5.60563328751, 224.5886131854],
    [0.0000000001, 6.22792613909, 170049.41410852008],
    [0.00000000013, 2.82703801397, 38813.6003938327],
    [0.0000000001, 3.02574120742, 27147.04125427989],
    [0.0000000001, 2.23554494099, 78903.8505285201],
    [0.00000000013, 0.23254548151, 6282.83203250789],
    [0.0000000001, 5.31330188188, 207644.08701988787],
    [0.00000000012, 4.98783133373, 26395.7045800273],
    [0.00000000012, 3.81738635107, 25780.58933808811],
    [0.0000000001, 2.41181269432, 12565.9078824993],
    [0.00000000012, 2.61068546931, 26725.1432310819],
    [0.00000000012, 6.19453221549, 25451.1506870335],
    [0.00000000009, 4.05684885963, 51219.76094466129],
    [0.00000000009, 6.12208983529, 155572.0629253201],
    [0.00000000009, 0.41261244956, 78731.91823256049],
    [0.00000000009, 2.60381655038, 14764.9952257863],
    [0.00000000011, 1.67989630572, 65697.80154222329],
    [0.00000000012, 0.71134314907, 25446.73339731871],
    [0.00000000012, 1.81068922855, 26729.56052079669],
    [0.00000000012, 3.05761613841, 12725.20961729149],
    [0.0000000001, 2.47438981577, 65831.9105918083],
    [0.00000000009, 0.4092916932, 16703.3059509825],
    [0.00000000009, 4.90698904861, 51708.08511027749],
    [0.00000000009, 3.85732708279, 207594.0903979837],
    [0.00000000009, 4.96560671408, 156101.06447605268],
    [0.00000000012, 4.51597349846, 176954.23375935067],
    [0.00000000009, 0.27941818584, 68242.11596210669],
    [0.00000000009, 3.76248228932, 1910.9556657337],
    [0.00000000009, 2.58539985032, 50586.48957038109],
    [0.00000000009, 0.03828568933, 52609.7618385087],
    [0.00000000008, 4.59422184502, 29530.2342690561],
    [0.00000000009, 4.40872070931, 205.9417309537],
    [0.00000000009, 1.91710703544, 55516.6625273317],
    [0.00000000011, 0.78490575811, 52022.2712901471],
    [0.00000000011, 1.79573927984, 157057.35363202327],
    [0.00000000008, 6.02666588108, 39629.56816154889],
    [0.0000000001, 0.38285944104, 52382.23564906909],
    [0.00000000008, 4.34710667767, 52182.67865953191],
    [0.0000000001, 4.32001939934, 40565.4981422577],
    [0.00000000008, 2.87593439674, 103.3365917021],
    [0.00000000008, 5.31493047379, 157483.26240853727],
    [0.00000000008, 4.79233550623, 27177.8557502513],
    [0.00000000008, 4.01288217857, 24998.4381678641],
    [0.00000000009, 4.80787399572, 19.42594341629],
    [0.0000000001, 2.27022895876, 536.5606946119],
    [0.0000000001, 4.80007299648, 260878.78759825832],
    [0.00000000008, 4.56235937282, 48847.9144443517],
    [0.00000000008, 4.66549233094, 860.55374623631],
    [0.00000000008, 2.76375833425, 26720.93069837089],
    [0.00000000009, 5.5856613453, 25654.43522118089],
    [0.00000000009, 0.00405995806, 63498.22656396929],
    [0.00000000008, 1.38258172759, 52595.53474450709],
    [0.00000000008, 0.52005477263, 130446.87307235529],
    [0.00000000007, 1.78779062151, 50697.1835265675],
    [0.00000000008, 4.09271417559, 1224.06165826211],
    [0.00000000009, 5.72498036679, 19316.9487228451],
    [0.00000000007, 0.38836950932, 13541.17738500769],
    [0.00000000009, 1.66361806448, 130443.64086071249],
    [0.00000000007, 0.73505185505, 209812.84750217048],
    [0.00000000007, 2.21903348151, 9384.59719059169],
    [0.00000000007, 2.18741011968, 46848.0863572821],
    [0.00000000007, 2.0711954685, 172402.28026229187],
    [0.00000000007, 5.46643566327, 846.3266522347],
    [0.00000000007, 1.48055041129, 27044.4361150283],
    [0.00000000007, 0.42256065489, 150244.58681693728],
    [0.00000000009, 2.36014528596, 26735.1577923725],
    [0.00000000007, 3.18642075607, 52325.61329776649],
    [0.00000000007, 6.1783916264, 45892.9742506405],
    [0.00000000008, 1.20719608552, 52169.42154173189],
    [0.00000000008, 0.42457308525, 83924.79765639128],
    [0.00000000007, 3.81342742455, 80597.1496350781],
    [0.00000000006, 2.21280392322, 52279.14287485049],
    [0.00000000006, 1.57105717926, 51013.57539622409],
    [0.00000000008, 2.16921693506, 129387.49114216608],
    [0.00000000009, 2.14041581315, 955.8435590921],
    [0.00000000008, 6.21586114247, 77727.14873011068],
    [0.00000000006, 5.7178263896, 79330.44871939608],
    [0.00000000007, 3.99442191803, 78378.3925308913],
    [0.00000000007, 0.83146896151, 51219.96272405629],
    [0.00000000006, 2.63351784574, 129373.26404816448],
    [0.00000000007, 0.0601375343, 26162.928557625],
    [0.00000000006, 5.10934915127, 103241.99019671988],
    [0.00000000006, 5.27952242053, 3340.36860921629],
    [0.00000000006, 2.10211584098, 35472.9879671329],
    [0.00000000006, 2.93834812676, 130653.05862079248],
    [0.00000000006, 4.63873538075, 110.45013870291],
    [0.00000000007, 6.1493584843, 77631.16950289288],
    [0.00000000006, 3.41608343835, 53131.16220727349],
    [0.00000000006, 2.45250087046, 26013.3653604904],
    [0.00000000006, 4.96304042103, 25508.4593720589],
    [0.00000000006, 3.84217726377, 26667.8345460565],
    [0.00000000006, 2.84953525287, 70268.93716521488],
    [0.00000000006, 2.18073760821, 103918.14464590348],
    [0.00000000008, 5.64484638063, 157587.0445971179],
    [0.00000000006, 0.28527129594, 6885.39370741431],
    [0.00000000007, 3.20891519423, 214364.80099922928],
    [0.00000000007, 2.7950844759, 25754.2910182883],
    [0.00000000007, 6.0101332089, 26422.0028998271],
    [0.00000000006, 4.09475623089, 60055.65161900389],
    [0.00000000006, 4.43814061291, 78149.51395352086],
    [0.00000000005, 5.60856067263, 50064.3997872543],
    [0.00000000006, 1.06133168572, 128221.0024211677],
    [0.00000000006, 3.38536280287, 75615.49841673308],
    [0.00000000005, 5.98443573479, 137678.43511695447],
    [0.00000000007, 1.25296072469, 56727.51596272369],
    [0.00000000007, 1.14884253624, 8194.0315157251],
    [0.00000000005, 4.4888601566, 130226.46042991648],
    [0.00000000006, 4.17115612398, 80382.71710258449],
    [0.00000000006, 0.69855070126, 51653.47268253809],
    [0.00000000006, 4.78072360502, 123669.0489241089],
    [0.00000000006, 5.42312230542, 72602.13355808688],
    [0.00000000006, 6.00561848302, 50056.79860528649],
    [0.00000000005, 5.89027963231, 102769.89703549728],
    [0.00000000006, 5.34345526598, 74820.89066227368],
    [0.00000000006, 0.24757397975, 161079.6161639875],
    [0.00000000006, 1.60819865465, 103932.37173990508],
    [0.00000000006, 1.04008531783, 25234.9505773057],
    [0.00000000007, 5.82651027335, 154938.58977164488],
    [0.00000000005, 5.52069502978, 419.2408263917],
    [0.00000000005, 2.31699479833, 19406.9221056581],
    [0.00000000006, 1.96387669233, 1265.81129610991],
    [0.00000000007, 5.70425979338, 64901.5035354069],
    [0.00000000005, 4.02516634304, 73711.51211018028],
    [0.00000000005, 5.11989980868, 78213.95662030189],
    [0.00000000006, 5.18848518823, 182085.87484340827],
    [0.00000000005, 5.44202376441, 102755.66994149568],
    [0.00000000005, 4.80390003741, 40565.01050729069],
    [0.00000000005, 6.1317026092, 102.84895673509],
    [0.00000000005, 4.3011225762, 51748.96427478889],
    [0.00000000005, 0.85038224536, 53399.86794141051],
    [0.00000000005, 2.42619611574, 27780.31262856009],
    [0.00000000005, 1.5664023035, 80482.22271142589],
    [0.00000000005, 2.47762753907, 25938.5837619231],
    [0.00000000005, 5.22476504933, 26402.33313892731],
    [0.00000000005, 3.58045263546, 25773.96077918809],
    [0.00000000005, 0.01470040312, 77616.94240889128],
    [0.00000000005, 0.50724383605, 34282.4222922663],
    [0.00000000006, 4.8950493376, 50050.17269325269],
    [0.00000000005, 1.99588630926, 17893.8716258491],
    [0.00000000004, 0.97602564752, 130432.64597835368],
    [0.00000000004, 0.40741730958, 51852.54468397449],
    [0.00000000004, 2.2346729942, 32370.73517408209],
    [0.00000000005, 1.35451697835, 204151.51545301828],
    [0.00000000006, 1.74602932944, 75930.75684933408],
    [0.00000000004, 5.26812670096, 25668.17468021549],
    [0.00000000005, 1.36761975943, 6043.9847638919],
    [0.00000000005, 2.74357702126, 39450.5966658569],
    [0.00000000005, 2.28369543224, 24491.96051677309],
    [0.00000000004, 1.23165526523, 51955.63745819309],
    [0.00000000004, 4.09092913231, 103498.66000202828],
    [0.00000000005, 0.0689526743, 52396.4627430707],
    [0.00000000004, 2.5635462379, 104505.6351942651],
    [0.00000000005, 5.58769879303, 23754.46293121869],
    [0.00000000005, 5.71030733431, 123201.08393375449],
    [0.00000000004, 6.20993923204, 54087.2495838491],
    [0.00000000004, 3.63799815383, 637.24008950771],
    [0.00000000004, 0.59460014711, 28791.7631137333],
    [0.00000000004, 1.92743223051, 23384.5308043821],
    [0.00000000005, 4.5266907284, 53029.2464823839],
    [0.00000000005, 0.25501672186, 18848.98373249069],
    [0.00000000004, 1.81268637965, 26824.02347258949],
    [0.00000000004, 0.70934599797, 25352.2704455259],
    [0.00000000004, 3.53975344268, 133882.3344703199],
    [0.00000000004, 0.87353062113, 132658.5166295413],
    [0.00000000004, 3.22384434044, 53772.23654291649],
    [0.00000000004, 2.01166034864, 183571.1655501115],
    [0.00000000004, 5.89521734601, 167850.32676523307],
    [0.00000000005, 5.28708364201, 145204.9985686243],
    [0.00000000004, 1.3486269553, 27171.2271913513],
    [0.00000000004, 1.17340542232, 25005.0667267641],
    [0.00000000004, 3.00220929293, 50483.8844311295],
    [0.00000000004, 0.14217969958, 78786.53066029989],
    [0.00000000004, 3.41518083973, 949.4194264533],
    [0.00000000005, 0.77055922503, 45892.48661567349],
    [0.00000000004, 3.51962830585, 1795.5022612045],
    [0.00000000005, 1.84426394169, 26709.8907598969],
    [0.00000000005, 0.67776843593, 25466.4031582185],
    [0.00000000004, 4.2709311511, 52065.84377941249],
    [0.00000000004, 0.10877025827, 2222.1004520805],
    [0.00000000004, 1.11438053331, 78270.58180110609],
    [0.00000000004, 5.94116454026, 25653.94758621389],
    [0.00000000004, 5.36329329492, 49842.36607279289],
    [0.00000000004, 4.90307551419, 143005.9112253373],
    [0.00000000004, 1.70672949321, 78800.75775430149],
    [0.00000000004, 0.14272238686, 65697.31390725628],
    [0.00000000003, 1.76268636575, 52195.23222656469],
    [0.00000000004, 3.45396433025, 130459.42928625426],
    [0.00000000004, 5.54668248593, 24491.47288180609],
    [0.00000000004, 2.57630900199, 3178.38960805111],
    [0.00000000004, 3.69827148826, 220.16882495529],
    [0.00000000004, 3.39420749098, 52250.8316991992],
    [0.00000000003, 2.73132197327, 78160.86046798748],
    [0.00000000004, 2.89190828519, 87367.86023632369],
    [0.00000000004, 0.15780189015, 130435.87818999648],
    [0.00000000004, 0.14307301866, 53234.94439585409],
    [0.00000000004, 0.06711300408, 26575.7817103119],
    [0.00000000004, 2.45491937354, 25600.5122078035],
    [0.00000000003, 5.37884708213, 1486.2239385487],
    [0.00000000005, 3.35368845011, 86144.04239554508],
    [0.00000000004, 1.34102185895, 32132.3755404331],
    [0.00000000004, 1.04693916592, 66653.40128383189],
    [0.00000000003, 0.35934615572, 52310.1591502169],
    [0.00000000003, 2.24307597389, 45290.90021070109],
    [0.00000000003, 5.05641378963, 70383.86408886709],
    [0.00000000003, 2.84685809679, 52252.31617190749],
    [0.00000000005, 0.41148055834, 52808.83383994509],
    [0.00000000003, 0.89098898576, 1588.82907780029],
    [0.00000000004, 4.17927437554, 58857.2749540315],
    [0.00000000004, 3.20092050693, 51951.70530492999],
    [0.00000000003, 2.40144059169, 50264.8506174147],
    [0.00000000004, 1.17285198222, 20043.9183776823],
    [0.00000000004, 3.78297088323, 128320.99566497609],
    [0.00000000003, 3.96547374476, 25986.18444079209],
    [0.00000000003, 4.83974394004, 26190.1094773233],
    [0.00000000004, 1.45951607601, 136722.8353753459],
    [0.00000000003, 2.8425502331, 65717.47130312308],
    [0.00000000003, 2.6250189324, 181026.49291321906],
    [0.00000000003, 4.29835303229, 51535.66517935089],
    [0.00000000004, 0.32726328089, 129799.86223904048],
    [0.00000000003, 4.92235874244, 26073.91986505609],
    [0.00000000003, 3.88285894236, 26102.3740530593],
    [0.00000000003, 4.97897799737, 52168.44891866409],
    [0.00000000004, 2.55090678746, 52155.8927047651],
    [0.00000000004, 1.2967726669, 37698.6989174319],
    [0.00000000003, 0.56868525863, 51109.06698847489],
    [0.00000000003, 1.87341446779, 26247.4486938499],
    [0.00000000003, 0.64861790983, 25928.8452242655],
    [0.00000000004, 0.3097928506, 468.20880783791],
    [0.00000000004, 3.27872430484, 132028.83242063827],
    [0.00000000004, 5.61336389985, 25661.06113321469],
    [0.00000000003, 0.47396259409, 2703.3723371921],
    [0.00000000004, 5.86092912592, 166740.9482131397],
    [0.00000000004, 3.23572058854, 59414.23805726489],
    [0.00000000003, 4.82502734269, 61560.8911087071],
    [0.00000000003, 0.00693087411, 79316.22162539448],
    [0.00000000003, 3.05784222447, 130866.35771623049],
    [0.00000000003, 0.12277419735, 79219.06534884768],
    [0.00000000003, 2.46452817521, 24506.18761077469],
    [0.00000000003, 0.6613665753, 51868.4924796623],
    [0.00000000003, 2.85883702115, 19202.50943415989],
    [0.00000000003, 6.14048429792, 40852.8983673605],
    [0.00000000003, 2.81485517413, 116783.89903417809],
    [0.00000000003, 5.64866640193, 105460.74730090669],
    [0.00000000003, 0.28115071068, 48835.43767393209],
    [0.00000000003, 4.12067030266, 114.68310616872],
    [0.00000000003, 4.90383671624, 76785.08666814168],
    [0.00000000003, 0.85813944126, 81592.08889848628],
    [0.00000000003, 2.81772139589, 95247.46175469569],
    [0.00000000003, 4.69086415103, 52171.68113030689],
    [0.00000000004, 5.11822399207, 78110.17443172129],
    [0.00000000003, 2.45643813863, 68050.18006102808],
    [0.00000000003, 5.59679660207, 38653.81102407349],
    [0.00000000003, 1.32662236669, 2219.0009216703],
    [0.00000000003, 5.9234136155, 52179.4438010229],
    [0.00000000003, 4.15087523006, 52286.25642185129],
    [0.00000000003, 0.1734886304, 76674.39271195528],
    [0.00000000003, 0.93059863207, 126997.18458038908],
    [0.00000000003, 4.49117697679, 77101.47853779829],
    [0.00000000003, 4.40672346738, 77741.37582411229],
    [0.00000000003, 4.09517524067, 8989.22388794889],
    [0.00000000003, 5.27976660688, 77733.77464214448],
    [0.00000000003, 1.52949550682, 286966.6907398325],
    [0.00000000003, 0.97589529959, 74.53778108379],
    [0.00000000003, 4.2184700941, 632.5399218297],
    [0.00000000004, 4.47958960947, 28287.2343023447],
    [0.00000000004, 4.32562807533, 23889.0596157707],
    [0.00000000003, 5.21982122522, 75930.26921436709],
    [0.00000000002, 1.69313010887, 182188.96761762688],
    [0.00000000003, 4.67718054767, 27250.62166346549],
    [0.00000000003, 4.13971825138, 51315.74017187909],
    [0.00000000003, 4.52130139518, 52182.67601266569],
    [0.00000000002, 4.85799167915, 121335.85253123689],
    [0.00000000002, 3.88643180579, 110012.70079796549],
    [0.00000000002, 1.2206719273, 2008.8013566425],
    [0.00000000002, 3.76859743855, 24925.6722546499],
    [0.00000000003, 0.31070573063, 39629.08052658189],
    [0.00000000003, 3.24788020549, 3340.8562441833],
    [0.00000000002, 0.35390973897, 23439.20449861769],
    [0.00000000002, 1.50089471176, 29415.79498037089],
    [0.00000000003, 0.83102506625, 25131.85780308709],
    [0.00000000003, 6.25945305227, 51123.29408247649],
    [0.00000000003, 0.28921662553, 90695.50825763689],
    [0.00000000002, 0.13680232887, 24505.69997580769],
    [0.00000000003, 2.81292041302, 26011.8808877821],
    [0.00000000002, 3.34607115822, 51329.9672658807],
    [0.00000000003, 4.94974770833, 81604.56566890588],
    [0.00000000003, 5.66982181767, 52813.0463726561],
    [0.00000000003, 0.02173421963, 391318.79094109643],
    [0.00000000002, 2.96964107128, 196137.3172500943],
    [0.00000000003, 1.28173018247, 156507.9929060289],
    [0.00000000003, 0.93767773997, 27727.2164762457],
    [0.00000000003, 1.58435463765, 24449.0774418697],
    [0.00000000002, 5.77422284047, 78057.76769376888],
    [0.00000000003, 3.17950494103, 78313.94986411028],
    [0.00000000003, 1.26777637523, 203042.13690092487],
    [0.00000000003, 2.84442647149, 34082.6754010819],
    [0.00000000002, 5.82921421247, 38634.6288981407],
    [0.00000000003, 4.25851095793, 78257.32468330608],
    [0.00000000002, 4.89476820098, 49527.10764019189],
    [0.00000000003, 1.95628126873, 52041.9410510469],
    [0.00000000002, 3.4664850678, 104819.8213741347],
    [0.00000000002, 5.05488554468, 62197.88738073129],
    [0.00000000003, 5.38708769121, 103291.98681862408],
    [0.00000000002, 1.95981868389, 51962.26337022689],
    [0.00000000002, 3.49107424857, 35077.61466449009],
    [0.00000000003, 1.93353771137, 96357.32794175608],
    [0.00000000002, 0.91930935416, 25021.16384690069],
    [0.00000000002, 4.74992302909, 66652.91364886488],
    [0.00000000002, 2.31652509447, 199599.0743209924],
    [0.00000000002, 4.52662503285, 9103.6631766341],
    [0.00000000002, 5.8115660001, 74923.34081550628],
    [0.00000000002, 5.31799111712, 17098.67925362531],
    [0.00000000002, 3.54866382542, 78470.13879064328],
    [0.00000000002, 0.96038903828, 101703.40155830729],
    [0.00000000002, 0.63534070468, 77307.66408623548],
    [0.00000000002, 5.3068520011, 104991.75367009429],
    [0.00000000002, 4.00030437238, 86143.55476057807],
    [0.00000000002, 2.46838836063, 26312.4917547596],
    [0.00000000003, 6.17763429163, 69159.55861312148],
    [0.00000000002, 4.36618723507, 27676.73221937449],
    [0.00000000002, 5.5219324637, 91919.81373338249],
    [0.00000000002, 2.07266268481, 225687.46509753366],
    [0.00000000002, 1.38235585269, 60369.83779887349],
    [0.00000000002, 2.45878629397, 26184.1261862755],
    [0.00000000002, 0.06324608365, 25992.1677318399],
    [0.00000000002, 0.06817332477, 62388.84801187589],
    [0.00000000002, 3.72202154841, 7880.3329708225],
    [0.00000000003, 3.66137462974, 51534.63653889291],
    [0.00000000002, 2.59383779834, 24608.79275002629],
    [0.00000000002, 4.79894731382, 183145.2567735975],
    [0.00000000002, 1.81015048354, 177288.0897001201],
    [0.00000000002, 1.1688462641, 26397.42528171349],
    [0.00000000002, 1.35318611352, 25778.86863640189],
    [0.00000000002, 3.47952755604, 42791.2090925567],
    [0.00000000002, 1.89575854549, 38813.11275886569],
    [0.00000000002, 3.54021512986, 51539.0538286077],
    [0.00000000002, 2.45627954068, 24952.4700871645],
    [0.00000000002, 0.06575283694, 27223.8238309509],
    [0.00000000002, 2.99909862001, 103719.07264446709],
    [0.00000000002, 1.64606671842, 25984.3647704771],
    [0.00000000002, 0.8759656592, 26191.9291476383],
    [0.00000000002, 5.44690335938, 25927.7395896729],
    [0.00000000002, 3.35831432542, 26248.5543284425],
    [0.00000000002, 3.68753780033, 113341.32408921266],
    [0.00000000002, 1.57407073796, 53265.7588918255],
    [0.00000000002, 6.17867775538, 51842.1941598625],
    [0.00000000002, 0.90904857785, 16066.3096789583],
    [0.00000000002, 0.52784265993, 29550.3916649229],
    [0.00000000002, 1.99418971769, 22625.9022531925],
    [0.00000000002, 6.15702102064, 27037.32256802749],
    [0.00000000002, 2.64819666416, 25138.9713500879],
    [0.00000000002, 2.50748734527, 157482.7747735703],
    [0.00000000002, 4.84158872259, 52817.46366237089],
    [0.00000000002, 2.22725796457, 104202.2931866457],
    [0.00000000002, 6.26671716778, 25550.85481199529],
    [0.00000000002, 0.5052814023, 52388.86156110289],
    [0.00000000002, 2.07951392438, 233731.99016146208],
    [0.00000000002, 1.72258811309, 54824.5049261049],
    [0.00000000002, 3.30916137339, 13655.6166736929],
    [0.00000000002, 5.77355700704, 78793.15657233368],
    [0.00000000002, 0.24904980575, 168959.21768235945],
    [0.00000000002, 4.68270285738, 205260.89400511168],
    [0.00000000002, 4.78459138847, 128106.07549751546],
    [0.00000000002, 0.55814555148, 50910.4826220055],
    [0.00000000002, 1.5189484426, 51859.65823097529],
    [0.00000000002, 6.23120336216, 25863.8021633558],
    [0.00000000002, 2.8359270383, 53758.00944891489],
    [0.00000000002, 4.03688605095, 52492.4419702885],
    [0.00000000002, 2.18084353651, 735.6326960483],
    [0.00000000002, 5.3224361901, 736.1203310153],
    [0.00000000002, 3.11385751174, 1066.2516597065],
    [0.00000000002, 0.0878120293, 215474.17955132265],
    [0.00000000002, 3.93802376645, 26077.1012587938],
    [0.00000000002, 4.86719391834, 26099.1926593216],
    [0.00000000002, 2.73032719646, 96356.84030678908],
    [0.00000000002, 4.39557118339, 50579.37602338029],
    [0.00000000002, 3.37995643779, 176332.4899585115],
    [0.00000000002, 3.60695289838, 78896.73698151928],
    [0.00000000002, 4.97912201809, 26411.6523757151],
    [0.00000000002, 3.92261173243, 87253.42094763846],
    [0.00000000002, 2.8549949578, 181659.96606689427],
    [0.00000000002, 6.13761457132, 23976.00901071309],
    [0.00000000002, 4.27004909023, 102232.60488843489],
    [0.00000000002, 1.87598894439, 52483.6077216015],
    [0.00000000002, 4.99129516853, 199599.56195595945],
    [0.00000000002, 5.06914347559, 25933.8805136059],
    [0.00000000002, 3.55063804653, 23439.6921335847],
    [0.00000000001, 3.06891862205, 27351.3043216359],
    [0.00000000001, 5.73629906275, 24824.9895964795],
    [0.00000000001, 3.09801335678, 78697.66498008289],
    [0.00000000002, 3.94465304931, 60370.3254338405],
    [0.00000000001, 1.67825434512, 51596.3625136331],
    [0.00000000002, 2.96585642839, 103815.05187168489],
    [0.00000000002, 3.0578692328, 33326.33491569069],
    [0.00000000002, 5.41433241516, 51226.87449166209],
    [0.00000000001, 4.05308794514, 77307.86586563049],
    [0.00000000002, 1.32820705945, 50952.23225985329],
    [0.00000000002, 0.3554664833, 65716.98366815608],
    [0.00000000001, 1.46542460653, 231348.79714668586],
    [0.00000000001, 2.79951095321, 163765.85062356168],
    [0.00000000002, 1.10119151677, 34281.9346572993],
    [0.00000000001, 1.58974685995, 25234.46294233869],
    [0.00000000001, 4.42744475216, 147423.7556728111],
    [0.00000000002, 3.30510234043, 26514.25751496669],
    [0.00000000001, 2.03602296374, 3442.3311274819],
    [0.00000000001, 4.23846527178, 102762.29585352947],
    [0.00000000001, 2.62660758779, 189854.24140010288],
    [0.00000000001, 3.14624674879, 54879.6662553075],
    [0.00000000002, 3.3754247498, 94330.01910368088],
    [0.00000000002, 4.79787865109, 22747.04689739089],
    [0.00000000001, 3.45952976424, 138319.84867869344],
    [0.00000000001, 3.22111896048, 52509.9060414013],
    [0.00000000001, 1.00099608993, 35191.56631820829],
    [0.00000000002, 4.07843204929, 26713.81715137009],
    [0.00000000002, 4.72678563551, 25462.4767667453],
    [0.00000000001, 1.39808874199, 76667.27916495448],
    [0.00000000001, 2.59019797939, 116783.41139921108],
    [0.00000000002, 2.54595097754, 23919.3864767751],
    [0.00000000002, 6.25926670726, 28256.9074413403],
    [0.00000000002, 0.98427002013, 99024.38027539749],
    [0.00000000001, 3.96509151964, 112546.1317169889],
    [0.00000000002, 5.94020231509, 26241.4381345755],
    [0.00000000001, 2.04558297271, 129329.89333829407],
    [0.00000000002, 4.89127097596, 118828.71993201328],
    [0.00000000001, 5.38890659728, 49956.8053614781],
    [0.00000000001, 0.0122095909, 28199.79727243529],
    [0.00000000001, 2.9371958053, 68241.62832713968],
    [0.00000000001, 0.45657187864, 103821.67778371868],
    [0.00000000002, 0.10751328565, 25441.13612574289],
    [0.00000000001, 3.04150710062, 80175.1527254233],
    [0.00000000002, 5.1955453001, 23962.2695516785],
    [0.00000000001, 1.92944311048, 26934.2297938089],
    [0.00000000001, 0.85501733527, 42153.72518556549],
    [0.00000000001, 5.28557867032, 50380.79165691089],
    [0.00000000001, 3.3034843273, 241562.08269289686],
    [0.00000000001, 1.5301689039, 55618.1374106303],
    [0.00000000001, 0.20150489504, 92740.81679043909],
    [0.00000000002, 4.04923139057, 27567.01353312209],
    [0.00000000002, 2.43602091587, 98690.03669966108],
    [0.00000000001, 5.40866392547, 173511.17117941825],
    [0.00000000001, 2.26707127188, 173511.6588143853],
    [0.00000000001, 5.30789985746, 102018.17235594128],
    [0.00000000001, 2.40978376724, 49954.19346603489],
    [0.00000000001, 5.41274037425, 155461.16718973868],
    [0.00000000001, 2.80860052221, 193937.74227184022],
    [0.00000000001, 2.80241855615, 26927.11624680809],
    [0.00000000001, 6.00279912865, 25249.1776713073],
    [0.00000000001, 5.41436875302, 149642.51277699787],
    [0.00000000001, 4.06699271013, 112231.45790215228],
    [0.00000000001, 4.88680216829, 639.6534688305],
    [0.00000000001, 4.38938154703, 28420.8557169627],
    [0.00000000002, 1.63653705415, 55503.69812194508],
    [0.00000000001, 1.19212507226, 35472.50033216589],
    [0.00000000001, 6.22889842286, 48997.9043100643],
    [0.00000000001, 3.64991019877, 27006.0772450395],
    [0.00000000001, 5.15530748603, 25170.2166730759],
    [0.00000000001, 0.21655513602, 106263.05586699749],
    [0.00000000001, 3.15004684273, 90989.40667698109],
    [0.00000000001, 3.42636128355, 50690.06997956669],
    [0.00000000001, 1.9063685811, 77836.86741636308],
    [0.00000000001, 1.7430682731, 125112.2834169717],
    [0.00000000001, 0.838614079, 26610.23674218449],
    [0.00000000001, 6.19974077735, 143980.69309287865],
    [0.00000000001, 2.30573879835, 153084.60008699627],
    [0.00000000001, 2.74311464361, 45404.8518644193],
    [0.00000000001, 4.11780710445, 2332.9525753885],
    [0.00000000001, 2.50393985667, 76152.30292882849],
    [0.00000000001, 3.70443537393, 45494.33761226529],
    [0.00000000001, 1.90974220877, 24925.18461968289],
    [0.00000000001, 3.79471530054, 50593.60311738189],
    [0.00000000001, 0.35163928497, 115674.03284711768],
    [0.00000000001, 4.64759915605, 151200.1865585459],
    [0.00000000001, 6.12692757039, 84308.18182358149],
    [0.00000000001, 2.49793910811, 129379.88996019828],
    [0.00000000001, 4.24960627112, 24073.1652872599],
    [0.00000000001, 4.55561141368, 28103.1286308555],
    [0.00000000001, 3.64820977115, 19406.43447069109],
    [0.00000000001, 5.22888939483, 24844.6593573793],
    [0.00000000001, 3.57632828997, 27331.6345607361],
    [0.00000000001, 0.38918442414, 154408.89880655028],
    [0.00000000001, 4.58125009028, 163298.37326817427],
    [0.00000000001, 4.05552152915, 58220.2786820073],
    [0.00000000001, 0.81056243735, 97670.63153038069],
    [0.00000000001, 1.70406295246, 22759.5236678105],
    [0.00000000001, 0.17160219777, 24395.9812895553],
    [0.00000000001, 4.19916792884, 92741.3044254061],
    [0.00000000001, 0.46762289675, 128850.19899510368],
    [0.00000000001, 3.27962382087, 25984.56654987209],
    [0.00000000001, 3.06090263008, 24357.0246061251],
    [0.00000000001, 5.74431505472, 27819.2693119903],
    [0.00000000001, 1.47564589622, 183724.45672562925],
    [0.00000000001, 2.32406253516, 26624.46383618609],
    [0.00000000001, 0.16830959152, 25455.3632197445],
    [0.00000000001, 3.30990224511, 25454.87558477749],
    [0.00000000001, 0.2008160779, 189385.78877478145],
    [0.00000000001, 3.34240873149, 189386.27640974845],
    [0.00000000001, 5.05200956798, 209659.06869168568],
    [0.00000000001, 2.1491074407, 109.9625037359],
    [0.00000000001, 4.58272161819, 82815.41910429788],
    [0.00000000001, 0.56829620714, 147423.26803784407],
    [0.00000000001, 3.84356790046, 23704.95394428149],
    [0.00000000001, 4.96164978434, 28471.3399738339],
    [0.00000000001, 3.64905591301, 51440.17358710009],
    [0.00000000001, 1.10275035993, 25035.39094090229],
    [0.00000000001, 0.92306365199, 26555.6243144451],
    [0.00000000001, 2.45569831568, 26177.63270690369],
    [0.00000000001, 0.06633406194, 25998.6612112117],
    [0.00000000001, 0.4163386677, 233681.99353955788],
    [0.00000000001, 1.602385489, 21650.63275068411],
    [0.00000000001, 0.91964688862, 30525.66116743129],
    [0.00000000001, 3.50363747347, 111590.04434041328],
    [0.00000000001, 2.57975917809, 24203.24579564031],
    [0.00000000001, 6.22545850671, 27973.04812247509],
    [0.00000000001, 5.61388226798, 99799.41525175449],
    [0.00000000001, 0.90114538219, 128106.56313248246],
    [0.00000000001, 2.25118383839, 104198.0775732955],
    [0.00000000001, 0.23482210375, 132350.9590085717],
    [0.00000000001, 5.46489469781, 6680.98103591609],
    [0.00000000001, 4.59107671722, 26202.09861277591],
    [0.00000000001, 1.28948419377, 50167.49256147289],
    [0.00000000001, 4.70995069593, 313054.5938814067],
    [0.00000000001, 1.61351002182, 131548.65044248087],
    [0.00000000001, 0.21134212997, 85502.14119883909],
    [0.00000000001, 3.59852250423, 51542.77872635169],
    [0.00000000001, 4.35050776234, 102018.65999090829],
    [0.00000000001, 5.00190822272, 51322.36608391289],
    [0.00000000001, 6.26093145675, 78413.51643934069],
    [0.00000000001, 4.7108305728, 156531.54400228668],
    [0.00000000001, 2.77611181285, 105306.96849042189],
    [0.00000000001, 4.1550566341, 35077.12702952309],
    [0.00000000001, 2.668919438, 155467.7931017725],
    [0.00000000001, 2.90242040099, 45290.41257573408],
    [0.00000000001, 5.09454263682, 1162.23088692429],
    [0.00000000001, 5.85832218706, 77211.19722405069],
    [0.00000000001, 2.94258825469, 25152.2169783489],
    [0.00000000001, 5.86262943011, 27024.07693976651],
    [0.00000000001, 2.69263645947, 247223.41474204906],
    [0.00000000001, 2.39382184066, 183674.94773869208],
    [0.00000000001, 4.71424763358, 25131.37016812009],
    [0.00000000001, 4.49841046349, 26126.2799946955],
    [0.00000000001, 4.30680722131, 26050.0139234199],
    [0.00000000001, 2.54564315044, 71980.38975724769],
    [0.00000000001, 3.77812730736, 27388.97377726269],
    [0.00000000001, 5.02709037744, 24787.3201408527],
    [0.00000000001, 5.22928116569, 155475.3942837403],
    [0.00000000001, 2.23214428102, 51756.07782178969],
    [0.00000000001, 3.75930601793, 54086.76194888209],
    [0.00000000001, 5.71244644048, 94138.08320260228],
    [0.00000000001, 3.60259923599, 24602.8562523545],
    [0.00000000001, 5.20261844881, 27573.4376657609],
    [0.00000000001, 5.97633149627, 121335.36489626988],
    [0.00000000001, 5.11853435105, 198490.18340386607],
    [0.00000000001, 2.41668452027, 181555.69624334667],
    [0.00000000001, 3.56429469477, 156534.7762139295],
    [0.00000000001, 0.16534790503, 12725.6972522585],
    [0.00000000001, 5.23354450332, 130006.04778747768],
    [0.00000000001, 3.16983107219, 89586.12970554348],
    [0.00000000001, 5.3149282669, 131394.87163199607],
    [0.00000000001, 2.18749112623, 77039.64776646046],
];

const Y2: &[Term] = &[
    [0.00020000263, 4.39813856862, 26088.1469590577],
    [0.00008268782, 5.12831925217, 0.2438174835],
    [0.00002498175, 1.81785035615, 52176.0501006319],
    [0.00000949347, 5.50772040452, 78263.95324220609],
    [0.00000776108, 0.81508927377, 26087.65932409069],
    [0.00000371109, 2.46339631518, 104351.8563837803],
    [0.00000130259, 5.58371836146, 130439.75952535449],
    [0.00000069902, 3.5914568428, 52175.56246566489],
    [0.00000042865, 2.38418074575, 156527.6626669287],
    [0.00000013564, 5.45308914681, 182615.56580850287],
    [0.00000011344, 0.1854686967, 78263.46560723908],
    [0.00000004184, 2.23177226385, 208703.46895007708],
    [0.00000002952, 5.92358038862, 24978.7684069643],
    [0.00000002715, 2.62856029278, 27197.5255111511],
    [0.00000002412, 3.20116782795, 104351.36874881329],
    [0.00000001268, 5.28987764263, 234791.37209165128],
    [0.00000001017, 2.76352422322, 51066.6715485385],
    [0.00000000591, 0.02739486208, 130439.27189038748],
    [0.00000000372, 5.53602920422, 53285.4286527253],
    [0.00000000379, 2.06228553945, 260879.27523322543],
    [0.00000000353, 5.84872228977, 77154.57469011268],
    [0.00000000353, 3.64262209095, 1109.1347346099],
    [0.00000000259, 2.45927570893, 20426.8149099055],
    [0.00000000259, 3.62787658106, 1059.6257476727],
    [0.00000000198, 6.08219469431, 27043.7467006663],
    [0.00000000178, 4.39645894496, 31749.4790082099],
    [0.00000000161, 5.71880342023, 1589.3167127673],
    [0.00000000148, 1.4037414664, 4552.1973145423],
    [0.00000000145, 0.02368396611, 21536.1934619989],
    [0.00000000158, 3.17661979051, 156527.17503196167],
    [0.00000000169, 2.43702666403, 25132.5472174491],
    [0.00000000134, 4.36077570655, 25558.4559939631],
    [0.00000000112, 5.11701683724, 286967.1783747996],
    [0.00000000111, 4.08624415081, 26617.8379241523],
    [0.00000000122, 6.20816277459, 46514.7180514797],
    [0.00000000125, 6.10874998399, 23869.3898548709],
    [0.00000000111, 0.7189325993, 14765.48286075331],
    [0.00000000106, 3.199580572, 51116.6681704427],
    [0.0000000012, 2.63555930925, 103242.47783168689],
    [0.00000000113, 1.00068732157, 27147.5288892469],
    [0.00000000105, 2.628160556, 28306.90406324449],
    [0.00000000086, 3.50491777711, 19317.43635781211],
    [0.00000000103, 1.19071414957, 5661.0882316687],
    [0.00000000067, 4.69029936211, 9104.1508116011],
    [0.00000000076, 0.3240837539, 529.9347825781],
    [0.00000000066, 2.87399773118, 50586.97720534809],
    [0.00000000066, 2.27463939345, 3442.81876244891],
    [0.00000000061, 1.2660337784, 37410.8110573621],
    [0.00000000059, 3.16922770991, 72602.62119305388],
    [0.00000000074, 0.14312537861, 22645.57201409229],
    [0.00000000056, 0.87699245253, 52705.7410657265],
    [0.00000000061, 1.98731213334, 30640.1004561165],
    [0.00000000053, 3.72430094233, 640.1411037975],
    [0.00000000056, 5.15278563625, 32858.8575603033],
    [0.00000000062, 5.26544507482, 51220.4503590233],
    [0.0000000005, 2.61090296354, 53131.6498422405],
    [0.00000000046, 2.37745190465, 27677.2198543415],
    [0.00000000045, 0.02572397068, 25973.70767037247],
    [0.00000000045, 2.48433200554, 26202.58624774291],
    [0.00000000044, 0.04666322888, 182615.07817353585],
    [0.00000000046, 4.10779409868, 27197.03787618409],
    [0.00000000046, 4.21737357836, 53235.43203082109],
    [0.00000000058, 0.51456998627, 57837.3821497841],
    [0.00000000043, 4.72097651637, 529.44714761109],
    [0.00000000042, 5.81334759172, 47624.0966035731],
    [0.00000000041, 1.35360879608, 26301.4460544957],
    [0.00000000039, 3.95217511506, 40853.3860023275],
    [0.00000000038, 1.0192336093, 25874.8478636197],
    [0.00000000045, 2.30681711799, 29530.7219040231],
    [0.00000000045, 3.25992009502, 10213.5293636945],
    [0.00000000035, 0.20035334587, 2119.00767786191],
    [0.00000000034, 5.21776132031, 56728.0035976907],
    [0.0000000004, 0.28616417785, 24978.28077199729],
    [0.0000000004, 5.69976040495, 129330.38097326108],
    [0.00000000033, 1.88435460588, 313055.08151637384],
    [0.00000000039, 0.71277136304, 955.3559241251],
    [0.00000000031, 5.95336552931, 6770.46678376209],
    [0.00000000038, 3.30701415262, 2218.51328670329],
    [0.00000000031, 5.89629431306, 12566.3955174663],
    [0.00000000032, 2.89503281988, 49957.2929964451],
    [0.00000000029, 4.08747500636, 426.8420083595],
    [0.00000000028, 3.89028250879, 43072.1431065143],
    [0.00000000025, 0.01043820952, 98690.52433462809],
    [0.0000000003, 1.58323308741, 79373.33179429949],
    [0.00000000023, 3.87566855556, 78793.64420730069],
    [0.0000000003, 5.69174979475, 77204.5713120169],
    [0.0000000002, 2.91659016078, 11322.42028082089],
    [0.00000000027, 5.66737798141, 54394.80720481869],
    [0.00000000023, 1.92399700068, 77308.35350059748],
    [0.00000000019, 4.33796152575, 83925.28529135829],
    [0.00000000022, 0.31026735565, 45405.3394993863],
    [0.0000000002, 0.76233233344, 36301.4325052687],
    [0.00000000018, 1.06684593234, 79323.33517239528],
    [0.00000000021, 1.06633987406, 13656.10430865991],
    [0.0000000002, 3.26662752657, 33326.8225506577],
    [0.00000000018, 0.08918897822, 52156.38033973211],
    [0.00000000023, 2.56517709904, 41962.7645544209],
    [0.00000000018, 4.49923548064, 52389.3491960699],
    [0.00000000017, 1.90164043236, 58946.76070187749],
    [0.00000000016, 0.07721057973, 23754.95056618569],
    [0.00000000019, 0.79767727082, 39609.8984006491],
    [0.00000000017, 4.96752330955, 51536.15281431789],
    [0.00000000018, 5.05941872394, 18849.4713674577],
    [0.00000000015, 5.67105202528, 76674.88034692229],
    [0.00000000015, 0.18434972499, 48733.47515566649],
    [0.00000000015, 2.77916270049, 853.4401992355],
    [0.00000000014, 2.0439341132, 82815.90673926489],
    [0.00000000014, 3.45421098562, 52179.9314359899],
    [0.00000000014, 0.12812152173, 15874.8614128467],
    [0.00000000014, 0.79649939505, 66941.2891439017],
    [0.00000000015, 3.92393517562, 16984.2399649401],
    [0.00000000015, 3.48624645549, 38654.2986590405],
    [0.00000000013, 5.35926600957, 53765.1229959157],
    [0.00000000013, 3.19246765373, 208702.98131511008],
    [0.00000000013, 2.25098683682, 50057.2862402535],
    [0.00000000016, 0.4814872854, 51646.3591355373],
    [0.00000000012, 2.40833345233, 28421.3433519297],
    [0.00000000013, 2.47413691628, 155418.2841148353],
    [0.00000000016, 5.37235452634, 55618.6250455973],
    [0.00000000012, 2.0549029778, 5661.5758666357],
    [0.00000000015, 5.46754476025, 52195.71986153169],
    [0.00000000014, 1.23967074882, 26514.7451499337],
    [0.00000000014, 1.73016204603, 110013.18843293248],
    [0.00000000013, 2.13522240551, 213.0552779545],
    [0.00000000014, 0.53482285581, 26728.0442453717],
    [0.00000000013, 2.09871625287, 52172.1687652739],
    [0.00000000011, 3.89215785881, 63498.71419893629],
    [0.00000000011, 5.32469405612, 79219.55298381469],
    [0.0000000001, 3.09632978067, 103292.47445359109],
    [0.00000000011, 0.49318054067, 31748.99137324289],
    [0.00000000014, 1.76374143598, 6283.3196674749],
    [0.0000000001, 5.54944886749, 52290.48938931711],
    [0.00000000012, 4.17529024605, 13521.50762410789],
    [0.00000000009, 1.46108642538, 35192.0539531753],
    [0.00000000009, 5.95543898844, 76045.1961380193],
    [0.00000000011, 4.31962648376, 62389.33564684289],
    [0.0000000001, 2.59338730813, 51749.45190975589],
    [0.00000000009, 3.09241629007, 124778.42747620228],
    [0.00000000009, 4.94047648268, 339142.984657948],
    [0.00000000009, 3.18433513864, 78244.2834813063],
    [0.00000000009, 4.2134232143, 20426.32727493849],
    [0.00000000011, 1.35641733071, 38520.1896094555],
    [0.0000000001, 4.87324110048, 16983.75232997309],
    [0.00000000009, 5.87248180566, 1109.6223695769],
    [0.00000000009, 3.08529390196, 52061.61081194667],
    [0.00000000009, 0.58390742179, 104881.54734887488],
    [0.00000000008, 0.01049678658, 68050.66769599509],
    [0.00000000008, 2.44377299382, 2333.44021035551],
    [0.00000000008, 2.07553269199, 12431.79883291429],
    [0.00000000008, 3.14068514277, 28206.9108194361],
    [0.00000000008, 4.9366721637, 136101.0915745067],
    [0.00000000008, 3.56776272307, 213.5429129215],
    [0.00000000008, 6.24685210587, 24499.0740637739],
    [0.00000000008, 4.90871772456, 103396.25664217169],
    [0.00000000007, 3.260045173, 52168.93655363109],
    [0.00000000009, 2.25308643231, 21535.70582703189],
    [0.00000000007, 0.96066249738, 53284.94101775829],
    [0.00000000007, 3.34414054226, 105461.23493587368],
    [0.00000000007, 0.56178116893, 69160.04624808849],
    [0.00000000009, 4.89006567905, 7994.77225950771],
    [0.00000000009, 1.87204677749, 73711.99974514729],
    [0.00000000008, 6.11573252209, 59414.7256922319],
    [0.00000000008, 2.34935594859, 52183.1636476327],
    [0.00000000007, 0.38833894888, 64742.2018006147],
    [0.00000000007, 0.26691004914, 78267.83457756409],
    [0.00000000007, 3.93557943129, 26107.81671995749],
    [0.00000000007, 1.72211044919, 26068.47719815791],
    [0.00000000006, 0.91009879641, 25028.7650288685],
    [0.00000000007, 4.5293127994, 51962.7510051939],
    [0.00000000007, 3.63772636438, 18208.05780571871],
    [0.00000000008, 1.62956568948, 44937.3745090319],
    [0.00000000008, 3.38799810242, 51066.18391357149],
    [0.00000000006, 4.15575122576, 105411.23831396949],
    [0.00000000007, 3.29006350511, 65697.80154222329],
    [0.00000000006, 1.27230132469, 88477.23878841709],
    [0.00000000006, 1.32946065086, 78477.2523376441],
    [0.00000000006, 4.53641896383, 52602.6482915079],
    [0.00000000007, 2.19484677855, 78283.62300310588],
    [0.00000000006, 0.97859883313, 19805.0711090663],
    [0.00000000005, 5.12029859122, 108903.8098808391],
    [0.00000000006, 0.51108107596, 129380.37759516528],
    [0.00000000005, 3.17438180692, 74821.37829724069],
    [0.00000000007, 3.90084269972, 45892.9742506405],
    [0.00000000005, 5.53465282046, 1059.1381127057],
    [0.00000000005, 0.53945271085, 26084.2656236997],
    [0.00000000005, 5.12008322277, 26092.0282944157],
    [0.00000000007, 3.38101832696, 71493.2426409605],
    [0.00000000005, 2.15419212921, 81706.5281871715],
    [0.00000000005, 5.99431638416, 51322.85371887989],
    [0.00000000005, 5.10141066049, 33968.23611239669],
    [0.00000000005, 6.07497929534, 78256.83969520529],
    [0.00000000005, 4.51394707071, 26617.35028918529],
    [0.00000000006, 5.11905884366, 78260.07190684808],
    [0.00000000004, 2.0215510415, 25661.5487681817],
    [0.00000000005, 3.63607614834, 94138.57083756929],
    [0.00000000004, 1.02197474906, 22645.08437912529],
    [0.00000000005, 3.86831492333, 93029.19228547589],
    [0.00000000004, 6.23205767407, 22760.01130277751],
    [0.00000000004, 2.54287848992, 29416.28261533789],
    [0.00000000004, 5.04658501458, 76145.18938182769],
    [0.00000000004, 5.53028555901, 181506.18725640947],
    [0.00000000004, 4.30468862075, 13521.9952590749],
    [0.00000000004, 5.69769574613, 99799.90288672148],
    [0.00000000004, 2.07912078316, 79853.02613748988],
    [0.00000000005, 3.94088501872, 44181.52165860769],
    [0.00000000004, 5.75049226379, 4551.7096795753],
    [0.00000000004, 5.78252204456, 32371.2228090491],
    [0.00000000004, 6.13397098904, 32858.36992533629],
    [0.00000000004, 5.47303342696, 54509.2464935039],
    [0.00000000004, 3.77296926059, 155468.28073673949],
    [0.00000000003, 1.76022764417, 162188.99471608087],
    [0.00000000003, 3.47863732548, 24498.58642880689],
    [0.00000000005, 5.41867016378, 78271.06678920689],
    [0.00000000004, 0.03915152889, 234790.88445668426],
    [0.00000000003, 3.63049034768, 77734.26227711148],
    [0.00000000004, 5.73459041878, 7879.84533585549],
    [0.00000000004, 4.32304044619, 64608.09275102969],
    [0.00000000004, 6.08591965357, 51116.18053547569],
    [0.00000000003, 3.3956583435, 28306.41642827749],
    [0.00000000004, 4.14203046511, 39744.0074502341],
    [0.00000000003, 6.2504456516, 104332.1866228805],
    [0.00000000004, 2.32061218672, 80482.71034639288],
    [0.00000000003, 3.42862683678, 37410.32342239509],
    [0.00000000004, 6.26655525096, 24864.32911827909],
    [0.00000000003, 0.81932036845, 103822.16541868569],
    [0.00000000004, 2.51942976235, 27311.96479983631],
    [0.00000000003, 0.55238739809, 120226.47397914348],
    [0.00000000003, 2.73238956336, 102133.09927959349],
    [0.00000000003, 6.16210003244, 150866.3306177765],
    [0.00000000003, 3.47088315334, 90830.10494218889],
    [0.00000000003, 1.70583242978, 77624.05595589208],
    [0.00000000003, 1.64244671238, 129484.15978374588],
    [0.00000000003, 3.01438324827, 125887.80602829569],
    [0.00000000003, 3.5975111077, 130969.45049044909],
    [0.00000000003, 3.3826347777, 58459.1259506233],
    [0.00000000002, 2.33982742399, 6282.83203250789],
    [0.00000000003, 5.89330250493, 26941.3433408097],
    [0.00000000002, 3.2204800884, 3327.89183879669],
    [0.00000000003, 4.49509466805, 18093.13088206649],
    [0.00000000002, 2.81219352708, 25132.0595824821],
    [0.00000000003, 4.7635626308, 26095.2605060585],
    [0.00000000003, 4.55467549289, 71025.27765060609],
    [0.00000000003, 4.71882234896, 43071.65547154729],
    [0.00000000002, 4.39575489958, 114565.14192999128],
    [0.00000000002, 1.2310638131, 71980.8773922147],
    [0.00000000002, 0.75134917742, 91785.70468379749],
    [0.00000000002, 0.91717698933, 2648.6986429565],
    [0.00000000002, 2.3277694166, 78378.3925308913],
    [0.00000000003, 3.33005216581, 104355.73771913828],
    [0.00000000002, 0.88668781336, 26081.03341205689],
    [0.00000000002, 1.33604738376, 77197.45776501608],
    [0.00000000002, 1.70708347774, 365230.88779952226],
    [0.00000000002, 1.39529664977, 78690.55143308209],
    [0.00000000003, 3.63831731324, 52815.9473869459],
    [0.00000000002, 2.08527920288, 25448.2496727437],
    [0.00000000003, 5.17799187468, 77837.35505133009],
    [0.00000000002, 5.22616840288, 104371.52614468009],
    [0.00000000002, 2.61518622291, 25028.27739390149],
    [0.00000000002, 1.38915456619, 11322.9079157879],
    [0.00000000002, 0.72086659814, 77211.68485901768],
    [0.00000000002, 2.08668332966, 105307.45612538888],
    [0.00000000002, 2.01988438935, 78050.6541467681],
    [0.00000000002, 1.6691682885, 27043.2590656993],
    [0.00000000002, 2.76016995044, 104344.74283677948],
    [0.00000000002, 0.83226802149, 46514.23041651269],
    [0.00000000002, 0.22774400791, 77154.08705514569],
    [0.00000000002, 0.91172072873, 26725.1432310819],
    [0.00000000002, 1.61031164889, 25451.1506870335],
    [0.00000000002, 0.95099409511, 131499.1414555437],
    [0.00000000002, 4.49976969859, 61279.9570947495],
    [0.00000000002, 5.98345605195, 89586.6173405105],
    [0.00000000002, 2.85946010033, 30639.61282114949],
    [0.00000000002, 0.15838364848, 97581.14578253469],
    [0.00000000002, 6.14579824758, 78149.51395352086],
    [0.00000000002, 5.58929876175, 7238.4317741165],
    [0.00000000002, 0.8301021357, 426.3543733925],
    [0.00000000002, 5.20457051939, 107794.43132874569],
    [0.00000000002, 1.91271152917, 47623.60896860609],
    [0.00000000002, 4.42235381341, 104565.15547921829],
    [0.00000000002, 0.42021990927, 44295.9609472929],
    [0.00000000002, 3.90488175057, 18093.6185170335],
    [0.00000000002, 0.51702864254, 10213.0417287275],
    [0.00000000002, 2.19510126559, 104358.96993078108],
    [0.00000000002, 1.87197741484, 104347.97504842229],
    [0.00000000002, 1.89656096023, 134991.71302241329],
    [0.00000000002, 3.81068190615, 129910.06856025988],
    [0.00000000002, 3.48333455064, 57836.89451481709],
    [0.00000000002, 5.38520038611, 25557.96835899609],
    [0.00000000002, 6.1225585216, 54294.81396101029],
    [0.00000000002, 1.91069399856, 102762.78348849648],
    [0.00000000001, 5.94439573345, 7238.9194090835],
    [0.00000000002, 2.71520511595, 25934.3681485729],
    [0.00000000001, 6.12042545447, 151975.7091698699],
    [0.00000000002, 2.95370958319, 26241.9257695425],
    [0.00000000001, 6.21917309565, 131549.1380774479],
    [0.00000000001, 2.63165117521, 23968.89546371229],
    [0.00000000002, 1.38299478051, 25021.6514818677],
    [0.00000000002, 4.14961473905, 27154.6424362477],
    [0.00000000001, 0.59279120743, 181556.1838783137],
    [0.00000000001, 4.95292728782, 27140.41534224609],
    [0.00000000001, 0.19355831516, 149.8070146181],
    [0.00000000001, 5.03717522016, 50586.48957038109],
    [0.00000000001, 2.46166203858, 85502.6288338061],
    [0.00000000001, 3.12377250466, 1052.51220067191],
    [0.00000000001, 0.1222089282, 84547.0290921975],
    [0.00000000001, 4.9949851855, 41962.27691945389],
    [0.00000000002, 5.81835190108, 1066.7392946735],
    [0.00000000001, 0.19689603888, 33326.33491569069],
    [0.00000000001, 4.36202291393, 103285.36090659029],
    [0.00000000001, 5.63116195221, 55504.18575691209],
    [0.00000000001, 4.47656675233, 117873.60782537168],
    [0.00000000001, 0.96879148402, 25035.8785758693],
    [0.00000000001, 5.66596818667, 58946.27306691049],
    [0.00000000001, 4.82817050708, 188276.8978576551],
    [0.00000000001, 0.16804966441, 49842.85370775989],
    [0.00000000001, 3.20454167097, 29428.7593857575],
    [0.00000000001, 3.65119748789, 146314.3771207177],
    [0.00000000001, 0.55150389784, 119117.0954270501],
    [0.00000000001, 1.29641320948, 39629.56816154889],
    [0.00000000001, 1.17683878413, 12546.72575656651],
    [0.00000000001, 1.82966773526, 64607.60511606269],
    [0.00000000001, 0.51019327318, 23868.9022199039],
    [0.00000000001, 3.01779717813, 48847.9144443517],
    [0.00000000001, 3.0817873079, 260878.78759825832],
    [0.00000000001, 1.94628548757, 25620.1819687033],
    [0.00000000001, 4.9007144953, 98068.78053378889],
    [0.00000000001, 5.19983179973, 22747.5345323579],
    [0.00000000001, 3.72290134761, 26556.11194941211],
    [0.00000000001, 4.32894922591, 85034.66384345168],
    [0.00000000001, 3.83325919627, 5327.7199258663],
    [0.00000000001, 5.56885466592, 63498.22656396929],
    [0.00000000001, 2.05127060689, 26300.95841952869],
    [0.00000000001, 5.07273427642, 105940.92927906409],
    [0.00000000001, 0.9185679586, 65831.9105918083],
    [0.00000000001, 4.03570631976, 79372.84415933248],
    [0.00000000001, 1.62497049537, 7.3573644843],
    [0.00000000001, 5.58196282531, 53399.86794141051],
    [0.00000000001, 2.25556473621, 80597.1496350781],
    [0.00000000001, 1.53347024755, 49527.59527515889],
    [0.00000000001, 2.15927670335, 36300.94487030169],
    [0.00000000001, 0.13876413209, 116918.00808376308],
    [0.00000000001, 0.13834609478, 26080.54577708989],
    [0.00000000001, 1.87343313975, 60056.13925397089],
    [0.00000000001, 3.24836507326, 10022.0810975829],
    [0.00000000001, 3.54409288852, 51123.7817174435],
    [0.00000000001, 2.04668299759, 51645.87150057029],
    [0.00000000001, 6.13056634943, 76.50988875911],
    [0.00000000001, 5.70833789847, 106570.61348796709],
    [0.00000000001, 1.85475666159, 25021.16384690069],
    [0.00000000001, 3.08169426022, 15874.37377787969],
    [0.00000000001, 5.0161623444, 86144.04239554508],
    [0.00000000001, 1.82601661336, 52644.0150909863],
    [0.00000000001, 4.40416127197, 26094.77551795771],
    [0.00000000001, 1.26427504022, 26081.51840015769],
    [0.00000000001, 1.17801372459, 6.86972951729],
    [0.00000000001, 5.00258165716, 16703.3059509825],
    [0.00000000001, 3.7573222934, 35472.9879671329],
    [0.00000000001, 5.03560870343, 42154.2128205325],
    [0.00000000001, 2.82069930264, 77410.75686045409],
    [0.00000000001, 1.94570699226, 103925.25819290428],
    [0.00000000001, 0.43527786277, 52329.8289111167],
    [0.00000000001, 1.53490250185, 6681.46867088311],
    [0.00000000001, 5.27958367842, 6770.9544187291],
    [0.00000000001, 3.09122313934, 955.8435590921],
    [0.00000000001, 5.47023024103, 51109.55462344189],
    [0.00000000001, 2.82652928734, 29530.2342690561],
    [0.00000000001, 3.34999395144, 26067.9895631909],
    [0.00000000001, 5.60842191407, 25447.76203777669],
    [0.00000000001, 1.24359184874, 52705.25343075949],
    [0.00000000001, 2.58826883392, 33967.74847742969],
    [0.00000000001, 1.58743932556, 25035.39094090229],
    [0.00000000001, 1.49321197683, 26107.32908499049],
    [0.00000000001, 5.64817713358, 23969.3830986793],
    [0.00000000001, 4.09696575895, 19316.9487228451],
    [0.00000000001, 0.38657846461, 26091.5406594487],
    [0.00000000001, 3.96518956917, 53131.16220727349],
    [0.00000000001, 1.17035557979, 95247.94938966268],
    [0.00000000001, 3.79316376096, 103299.58800059189],
    [0.00000000001, 6.16466999792, 26094.77287109149],
    [0.00000000001, 1.55660546282, 102233.09252340188],
    [0.00000000001, 3.72893918712, 25668.17468021549],
    [0.0, 1.31187403896, 12565.9078824993],
    [0.0, 0.3678899727, 54394.31956985169],
    [0.0, 1.40783572565, 111122.56698502589],
    [0.00000000001, 1.72210842613, 12432.2864678813],
    [0.00000000001, 2.54599021645, 115674.52048208468],
    [0.0, 3.09980373381, 25234.46294233869],
    [0.00000000001, 2.39000910681, 25661.06113321469],
    [0.00000000001, 3.51239889125, 39609.41076568209],
    [0.0, 6.00302318824, 45892.48661567349],
    [0.0, 3.95111212963, 77830.24150432929],
    [0.0, 4.29974909652, 116783.89903417809],
    [0.0, 2.30803098529, 28420.8557169627],
    [0.0, 3.48757973551, 103241.99019671988],
    [0.0, 5.4706360941, 52026.4869034973],
    [0.0, 3.3106300656, 19804.5834740993],
    [0.00000000001, 4.42730882654, 26083.7779887327],
    [0.0, 0.97906814023, 53242.5455778219],
    [0.0, 5.69544477873, 1588.82907780029],
    [0.0, 5.67543121769, 51219.96272405629],
    [0.0, 3.92348521122, 157637.04121902207],
    [0.0, 3.88298321255, 72602.13355808688],
    [0.0, 6.2461029197, 83924.79765639128],
    [0.0, 2.99531203217, 130420.0897644547],
    [0.0, 3.68023238451, 25668.6623151825],
    [0.0, 5.98068946715, 3340.8562441833],
    [0.0, 2.5988066711, 77204.08367704989],
    [0.0, 2.2691200511, 207594.0903979837],
    [0.0, 0.62064943415, 419.72846135871],
    [0.0, 0.91508299271, 32370.73517408209],
    [0.0, 0.42512526285, 78903.8505285201],
    [0.0, 1.63629020299, 44936.88687406489],
    [0.0, 6.1214688695, 286966.6907398325],
];

const Y3: &[Term] = &[
    [0.0000018066, 6.24763771127, 0.2438174835],
    [0.00000056109, 6.21607723411, 52176.0501006319],
    [0.00000023909, 3.52205756332, 78263.95324220609],
    [0.00000011317, 0.65434522049, 104351.8563837803],
    [0.00000011202, 4.63472742214, 26088.1469590577],
    [0.00000007321, 3.06113980531, 26087.65932409069],
    [0.00000005011, 3.87936295964, 130439.75952535449],
    [0.00000002025, 0.73521591485, 156527.6626669287],
    [0.00000001152, 1.69823188077, 52175.56246566489],
    [0.00000000763, 3.83589288112, 182615.56580850287],
    [0.00000000387, 4.87852090068, 78263.46560723908],
    [0.00000000274, 0.63429416338, 208703.46895007708],
    [0.00000000112, 1.64880744224, 104351.36874881329],
    [0.00000000095, 3.70512425843, 234791.37209165128],
    [0.00000000037, 2.93820472611, 24978.7684069643],
    [0.00000000034, 2.70920545196, 27197.5255111511],
    [0.00000000032, 0.48595621544, 260879.27523322543],
    [0.00000000024, 0.88877136179, 51066.6715485385],
    [0.00000000032, 4.71795792013, 130439.27189038748],
    [0.00000000013, 4.14981392057, 77154.57469011268],
    [0.0000000001, 3.54374573861, 286967.1783747996],
    [0.00000000013, 4.83147497313, 53285.4286527253],
    [0.0000000001, 1.53331553777, 156527.17503196167],
    [0.00000000006, 0.1173398989, 1109.1347346099],
    [0.00000000007, 1.42096187453, 1059.6257476727],
    [0.00000000006, 0.36688147081, 20426.8149099055],
    [0.00000000006, 0.99179814069, 103242.47783168689],
    [0.00000000004, 5.28779415998, 31749.4790082099],
    [0.00000000004, 1.32226409901, 79373.33179429949],
    [0.00000000003, 0.32143664919, 313055.08151637384],
    [0.00000000003, 5.50927594249, 4552.1973145423],
    [0.00000000003, 4.66013795345, 182615.07817353585],
    [0.00000000003, 4.10710790486, 46514.7180514797],
    [0.00000000003, 0.25274361593, 21536.1934619989],
    [0.00000000002, 4.79995023814, 27147.5288892469],
    [0.00000000002, 2.39000042999, 1589.3167127673],
    [0.00000000002, 5.16055835758, 25132.5472174491],
    [0.00000000002, 4.23604489079, 14765.48286075331],
    [0.00000000002, 4.24590446693, 51116.6681704427],
    [0.00000000002, 4.07863052508, 129330.38097326108],
    [0.00000000002, 6.04806962418, 27197.03787618409],
    [0.00000000002, 1.19379164655, 26617.8379241523],
    [0.00000000002, 0.44240554373, 27043.7467006663],
    [0.00000000002, 4.67526593433, 25558.4559939631],
    [0.00000000002, 1.3140935767, 72602.62119305388],
    [0.00000000002, 0.23323058095, 26068.47719815791],
    [0.00000000002, 5.43511468464, 26107.81671995749],
    [0.00000000001, 3.58800786511, 26092.0282944157],
    [0.00000000001, 2.08042717023, 26084.2656236997],
    [0.00000000001, 5.04284012325, 24978.28077199729],
    [0.00000000001, 1.47519959792, 37410.8110573621],
    [0.00000000001, 5.02608519942, 30640.1004561165],
    [0.00000000001, 5.10218274945, 52705.7410657265],
    [0.00000000001, 3.44712662114, 51220.4503590233],
    [0.00000000001, 0.20321095099, 47624.0966035731],
    [0.00000000001, 1.50125338315, 208702.98131511008],
    [0.00000000001, 1.69903209468, 9104.1508116011],
    [0.00000000001, 4.53006298092, 98690.52433462809],
    [0.00000000001, 4.299614227, 955.3559241251],
    [0.00000000001, 1.16934270913, 1109.6223695769],
    [0.00000000001, 0.43847536572, 19317.43635781211],
    [0.00000000001, 3.28791774568, 50586.97720534809],
    [0.00000000001, 3.80818275289, 12566.3955174663],
    [0.00000000001, 1.94170233989, 40853.3860023275],
    [0.00000000001, 2.16988291625, 53235.43203082109],
    [0.00000000001, 3.36850892547, 339142.984657948],
    [0.00000000001, 2.07799856696, 426.8420083595],
    [0.00000000001, 1.13583428934, 49957.2929964451],
    [0.00000000001, 2.48860782643, 26095.2605060585],
    [0.00000000001, 3.22444138778, 26081.03341205689],
    [0.00000000001, 2.99647624764, 23869.3898548709],
    [0.00000000001, 0.34236528707, 77308.35350059748],
    [0.00000000001, 4.24503082495, 105461.23493587368],
    [0.00000000001, 0.1074680393, 51646.3591355373],
    [0.00000000001, 0.85601964696, 155418.2841148353],
    [0.00000000001, 3.18986978065, 56728.0035976907],
    [0.00000000001, 1.94353556293, 53131.6498422405],
    [0.00000000001, 5.4939506673, 3442.81876244891],
    [0.00000000001, 2.08016019343, 78793.64420730069],
    [0.00000000001, 4.54434565803, 54394.80720481869],
    [0.00000000001, 5.42235344143, 79323.33517239528],
    [0.00000000001, 2.66875497262, 28306.90406324449],
    [0.00000000001, 4.76053635454, 45405.3394993863],
    [0.00000000001, 5.22561098934, 32858.8575603033],
    [0.0, 4.27647999319, 529.44714761109],
    [0.00000000001, 0.08839061971, 25028.7650288685],
    [0.0, 1.03862778956, 25874.8478636197],
    [0.00000000001, 0.19202613793, 22645.57201409229],
    [0.0, 0.74532357887, 640.1411037975],
    [0.0, 5.60594877309, 529.9347825781],
    [0.0, 4.64452132771, 26301.4460544957],
    [0.0, 2.15255497625, 83925.28529135829],
    [0.0, 0.24839982675, 82815.90673926489],
    [0.00000000001, 0.02689519967, 27677.2198543415],
    [0.0, 5.1780479567, 11322.42028082089],
    [0.0, 4.78725393347, 36301.4325052687],
    [0.0, 2.95601248059, 5661.5758666357],
    [0.0, 1.5038353785, 18849.4713674577],
    [0.0, 2.6756442319, 6770.46678376209],
    [0.0, 3.97584628325, 43072.1431065143],
    [0.0, 3.28546823218, 52156.38033973211],
    [0.0, 1.87043752965, 39609.8984006491],
    [0.0, 4.8153697216, 1052.51220067191],
    [0.0, 0.8519470826, 15874.8614128467],
    [0.0, 4.33911068639, 1066.7392946735],
    [0.0, 5.18479261632, 24499.0740637739],
    [0.0, 3.01728960403, 2119.00767786191],
    [0.0, 0.36191373868, 52179.9314359899],
    [0.0, 4.28779427258, 27043.2590656993],
    [0.0, 5.49560028256, 29530.7219040231],
    [0.0, 2.44474876799, 20426.32727493849],
    [0.0, 4.93651363037, 26514.7451499337],
    [0.0, 0.52831113499, 38654.2986590405],
    [0.0, 1.9486250481, 51066.18391357149],
    [0.0, 4.51508383281, 63498.71419893629],
    [0.0, 4.63260338147, 234790.88445668426],
    [0.0, 5.16055252636, 110013.18843293248],
    [0.0, 2.19677657341, 52195.71986153169],
    [0.0, 4.97627187962, 76674.88034692229],
    [0.0, 4.63491468562, 4551.7096795753],
    [0.0, 6.26527903795, 7.3573644843],
    [0.0, 4.12020457586, 33326.8225506577],
    [0.0, 0.12999351127, 2218.51328670329],
    [0.0, 3.6472482931, 51749.45190975589],
    [0.0, 1.65008357433, 7238.4317741165],
    [0.0, 5.13058700728, 52172.1687652739],
    [0.0, 2.61914963849, 53284.94101775829],
    [0.0, 5.02388999987, 66941.2891439017],
    [0.0, 6.01418094422, 52168.93655363109],
    [0.0, 2.01993495347, 58946.76070187749],
    [0.0, 0.98221708355, 30639.61282114949],
    [0.0, 1.52131721681, 62389.33564684289],
    [0.0, 2.07662809015, 105411.23831396949],
    [0.0, 0.99094878754, 103292.47445359109],
    [0.0, 5.07197491918, 23868.9022199039],
];

const Y4: &[Term] = &[
    [0.00000043303, 1.13774685024, 26088.1469590577],
    [0.00000016746, 1.28029969371, 0.2438174835],
    [0.00000005097, 4.24955975906, 52176.0501006319],
    [0.0000000111, 1.2833686736, 78263.95324220609],
    [0.00000000968, 4.75917629222, 26087.65932409069],
    [0.00000000362, 4.81899532084, 104351.8563837803],
    [0.00000000161, 1.99262264168, 130439.75952535449],
    [0.00000000075, 5.26842672327, 156527.6626669287],
    [0.00000000076, 1.36013166836, 52175.56246566489],
    [0.00000000033, 2.15747243303, 182615.56580850287],
    [0.00000000014, 3.97795789451, 78263.46560723908],
    [0.00000000014, 5.2763887476, 208703.46895007708],
    [0.00000000005, 2.08976600519, 234791.37209165128],
    [0.00000000004, 0.41935591421, 104351.36874881329],
    [0.00000000002, 1.30411243109, 24978.7684069643],
    [0.00000000002, 4.2790971727, 27197.5255111511],
    [0.00000000002, 5.16384952851, 260879.27523322543],
    [0.00000000001, 3.31456236049, 130439.27189038748],
    [0.00000000001, 1.94555546011, 286967.1783747996],
    [0.00000000001, 4.78035947332, 51066.6715485385],
    [0.00000000001, 6.04727171347, 1059.6257476727],
    [0.00000000001, 4.90982478671, 20426.8149099055],
    [0.0, 0.02105735648, 156527.17503196167],
    [0.0, 1.46282089336, 53285.4286527253],
    [0.0, 1.85776832505, 1109.1347346099],
    [0.0, 0.55166694814, 31749.4790082099],
    [0.0, 2.05256123583, 77154.57469011268],
    [0.0, 3.70596272569, 4552.1973145423],
    [0.0, 5.69177628153, 51116.6681704427],
    [0.0, 4.47226271461, 5661.0882316687],
    [0.0, 1.80113707019, 21536.1934619989],
    [0.0, 3.04937726063, 182615.07817353585],
    [0.0, 1.73584606362, 46514.7180514797],
    [0.0, 0.8136324339, 1589.3167127673],
    [0.0, 2.86001163068, 27147.5288892469],
    [0.0, 3.76188191169, 25132.5472174491],
    [0.0, 5.61217194797, 26617.8379241523],
    [0.0, 2.50285436895, 14765.48286075331],
    [0.0, 0.06217996093, 25558.4559939631],
    [0.0, 1.78288877958, 27043.7467006663],
    [0.0, 3.14225315293, 529.9347825781],
    [0.0, 3.5824714562, 57837.3821497841],
];

const Y5: &[Term] = &[
    [0.00000000414, 2.51938027426, 0.2438174835],
    [0.00000000327, 1.268146973, 26088.1469590577],
    [0.00000000134, 2.94456567084, 52176.0501006319],
    [0.00000000046, 5.94506878756, 78263.95324220609],
    [0.00000000016, 2.8871514058, 104351.8563837803],
    [0.00000000007, 0.85960797708, 26087.65932409069],
    [0.00000000006, 6.2696573819, 130439.75952535449],
    [0.00000000003, 3.37112838196, 156527.6626669287],
    [0.00000000001, 0.3684989032, 182615.56580850287],
    [0.00000000001, 5.73351518627, 52175.56246566489],
    [0.00000000001, 3.53868886531, 208703.46895007708],
    [0.0, 2.56994818453, 78263.46560723908],
    [0.0, 0.33722437006, 234791.37209165128],
    [0.0, 5.4921526335, 104351.36874881329],
    [0.0, 6.01269492359, 24978.7684069643],
    [0.0, 5.68183447366, 27197.5255111511],
];

const Z0: &[Term] = &[
    [0.04607665326, 1.99295081967, 26087.9031415742],
    [0.00708734365, PI, 0.0],
    [0.00469171617, 5.04215742764, 52175.8062831484],
    [0.00071626395, 1.80894256071, 78263.70942472259],
    [0.00012957446, 4.8592203201, 104351.61256629678],
    [0.00002575002, 1.62646731545, 130439.51570787099],
    [0.00000543259, 4.67698860167, 156527.41884944518],
    [0.00000119462, 1.44437994097, 182615.3219910194],
    [0.00000079477, 4.94442849343, 27197.2816936676],
    [0.00000082635, 2.03127961938, 24978.5245894808],
    [0.00000044712, 0.52659463739, 1059.3819301892],
    [0.00000043131, 5.66922412963, 20426.571092422],
    [0.00000034677, 2.36736170874, 25028.521211385],
    [0.00000032337, 1.29099631099, 31749.2351907264],
    [0.00000027465, 3.57680072404, 5661.3320491522],
    [0.00000027081, 4.49499356963, 208703.2251325936],
    [0.00000020978, 4.46131555233, 4551.9534970588],
    [0.00000020602, 1.12768557199, 1109.3785520934],
    [0.00000020252, 0.1172215772, 51116.4243529592],
    [0.00000023561, 1.82361021215, 53285.1848352418],
    [0.0000001415, 4.42485698284, 57837.1383323006],
    [0.00000016632, 5.09118864825, 51066.427731055],
    [0.00000011609, 3.48812792468, 21535.9496445154],
    [0.00000009897, 2.80940292918, 27043.5028831828],
    [0.0000000838, 2.46820093103, 46514.4742339962],
    [0.0000000795, 0.44767912341, 10213.285546211],
    [0.00000009234, 3.80445817621, 529.6909650946],
    [0.00000007834, 4.08006285427, 25132.3033999656],
    [0.00000007169, 2.4386162528, 47623.8527860896],
    [0.00000006283, 1.26244592145, 234791.12827416777],
    [0.00000006189, 3.24598311063, 77204.32749453338],
    [0.00000006312, 3.60156222051, 27147.28507176339],
    [0.00000005874, 3.18517530495, 14765.2390432698],
    [0.00000005464, 0.18067146403, 13521.7514415914],
    [0.00000005844, 4.88684915394, 79373.087976816],
    [0.00000005207, 1.04360609206, 426.598190876],
    [0.00000005084, 2.88826076001, 12566.1516999828],
    [0.00000004862, 1.05211425705, 1589.0728952838],
    [0.00000005778, 4.74518603718, 30639.856638633],
    [0.0000000447, 5.9424377612, 11322.6640983044],
    [0.00000004084, 6.10730721947, 41962.5207369374],
    [0.00000003921, 1.19592374632, 83925.0414738748],
    [0.00000003933, 1.60795544806, 25661.3049506982],
    [0.00000004046, 3.08469176646, 51646.11531805379],
    [0.00000003739, 2.04428825509, 15874.6175953632],
    [0.00000003728, 1.74332154184, 24498.8302462904],
    [0.00000003797, 1.86233694539, 77154.33087262919],
    [0.00000003417, 4.10830949198, 39609.6545831656],
    [0.00000003691, 3.50893180252, 37410.5672398786],
    [0.00000002644, 5.60089521868, 73711.75592766379],
    [0.0000000323, 5.39015797984, 955.5997416086],
    [0.00000002653, 5.52156950287, 26617.5941066688],
    [0.00000002526, 5.49112478707, 6283.0758499914],
    [0.00000003017, 6.08863660917, 53131.406024757],
    [0.0000000302, 5.46768108443, 25558.2121764796],
    [0.00000002169, 5.85843688724, 50586.73338786459],
    [0.00000002217, 5.81930894103, 51749.20809227239],
    [0.00000002036, 2.79411907992, 7238.6755916],
    [0.00000001904, 0.02429449494, 33326.5787331742],
    [0.00000001841, 3.31987542265, 36301.18868778519],
    [0.00000001693, 0.04022611885, 103292.23063610759],
    [0.00000001814, 0.58414302882, 63498.47038145279],
    [0.0000000191, 5.54302892735, 72602.37737557039],
    [0.0000000156, 0.9621545524, 65697.55772473979],
    [0.00000001605, 0.8485470896, 51220.20654153979],
    [0.00000001595, 5.65216619091, 26068.2333806744],
    [0.00000001487, 1.66950376778, 105460.99111839019],
    [0.00000001595, 1.4723892163, 26107.57290247399],
    [0.00000001485, 4.31307667056, 260879.03141574195],
    [0.00000001344, 3.05188579262, 68050.42387851159],
    [0.00000001601, 0.69333064931, 9103.9069941176],
    [0.00000001224, 3.56543079781, 19804.8272915828],
    [0.00000001258, 2.62817126488, 52705.49724824299],
    [0.00000001386, 0.42909271065, 53235.18821333759],
    [0.00000001392, 0.41896396083, 18849.2275499742],
    [0.00000001104, 1.37365365216, 45892.73043315699],
    [0.00000001191, 5.76715631957, 19317.1925403286],
    [0.00000001218, 6.16642870453, 77734.01845962799],
    [0.00000000991, 0.77508695125, 32858.61374281979],
    [0.00000001039, 4.25003847002, 110012.94461544899],
    [0.00000001155, 1.8329152417, 16983.9961474566],
    [0.00000000913, 4.91386835375, 103242.2340142034],
    [0.00000001096, 2.77782845562, 26091.7844769322],
    [0.00000000843, 2.10283893013, 23869.1460373874],
    [0.00000001147, 1.40069226758, 56727.7597802072],
    [0.00000001096, 4.34969785012, 26084.0218062162],
    [0.00000000888, 5.96405172933, 38654.05484155699],
    [0.00000000798, 5.90979724117, 43071.8992890308],
    [0.00000000894, 6.2089194933, 40853.142184844],
    [0.00000000751, 2.38280961577, 99799.65906923798],
    [0.00000000858, 3.48194203031, 59414.4818747484],
    [0.00000000903, 4.51539427543, 3442.5749449654],
    [0.00000000816, 4.68549846425, 28306.66024576099],
    [0.00000000739, 4.03898100455, 26514.5013324502],
    [0.00000000874, 3.33462533468, 22645.32819660879],
    [0.00000000685, 2.68994541603, 76674.63652943878],
    [0.00000000933, 3.52008984237, 6770.7106012456],
    [0.00000000668, 2.67447570603, 77837.11123384659],
    [0.00000000688, 4.1373584551, 27676.976036858],
    [0.00000000643, 0.26212576857, 639.897286314],
    [0.00000000747, 2.88413728742, 79219.3091663312],
    [0.00000000594, 4.72204801083, 29530.4780865396],
    [0.0000000058, 0.49131159361, 62389.09182935939],
    [0.0000000056, 0.58980434738, 26080.78959457339],
    [0.00000000636, 5.01277329265, 7.1135470008],
    [0.00000000664, 5.406157136, 213.299095438],
    [0.0000000046, 2.41008353609, 25448.00585526019],
    [0.00000000453, 4.02646064195, 91785.46086631398],
    [0.00000000441, 3.60120922804, 89586.37352302698],
    [0.00000000473, 3.19147656788, 25874.6040461362],
    [0.00000000452, 3.10205575226, 129380.13377768178],
    [0.00000000406, 1.57776301723, 2118.7638603784],
    [0.00000000495, 4.3509468616, 58946.51688439399],
    [0.00000000395, 0.29737033271, 25934.1243310894],
    [0.00000000392, 0.53546585935, 26241.681952059],
    [0.00000000382, 4.72731471129, 131548.89425996438],
    [0.00000000382, 4.49198737842, 71980.63357473118],
    [0.00000000368, 3.89892172772, 77308.10968311399],
    [0.00000000351, 1.04745682138, 2218.7571041868],
    [0.00000000356, 6.12309999532, 94138.32702008578],
    [0.00000000458, 2.31746139528, 98690.28051714458],
    [0.00000000327, 4.52406643775, 52195.47604404819],
    [0.00000000393, 3.09725258397, 69159.80243060499],
    [0.0000000031, 1.10653094623, 23969.1392811958],
    [0.00000000356, 1.0806284094, 286966.9345573162],
    [0.00000000345, 5.71957868514, 78793.40038981718],
    [0.00000000293, 1.74897333943, 54394.56338733519],
    [0.00000000275, 4.053721558, 149.5631971346],
    [0.00000000325, 2.41844865673, 52156.1365222486],
    [0.00000000273, 0.34374545554, 51535.90899683439],
    [0.00000000256, 3.57544759221, 1066.49547719],
    [0.00000000252, 2.07789295059, 48733.23133818299],
    [0.00000000326, 3.49941746899, 79323.09135491178],
    [0.00000000327, 2.946518855, 103821.92160120218],
    [0.000000003, 3.53612598449, 26301.2022370122],
    [0.00000000253, 0.67254115542, 1052.2683831884],
    [0.00000000274, 1.02128544399, 136100.84775702318],
    [0.00000000227, 1.68291413296, 129330.13715577759],
    [0.00000000264, 4.42527687575, 82815.66292178139],
    [0.0000000028, 3.47711681992, 44937.1306915484],
    [0.00000000207, 5.26698515692, 25938.3399444396],
    [0.00000000233, 1.58956295605, 26095.016688575],
    [0.00000000211, 2.55179422569, 45405.0956819028],
    [0.00000000223, 1.11566460119, 52171.9249477904],
    [0.00000000195, 5.61180266071, 25021.4076643842],
    [0.00000000204, 5.44212122344, 125887.56221081219],
    [0.00000000193, 2.20507758963, 25035.6347583858],
    [0.00000000189, 5.788236485, 102762.53967101299],
    [0.00000000213, 1.31985764486, 26555.8681319286],
    [0.00000000191, 0.24359410467, 85502.38501632259],
    [0.00000000195, 5.97596513107, 105307.21230790539],
    [0.00000000218, 5.85009667782, 25619.9381512198],
    [0.00000000181, 5.75215140812, 103925.01437542078],
    [0.0000000019, 3.25444605074, 13655.8604911764],
    [0.00000000177, 5.31586012519, 50057.04242277],
    [0.00000000207, 2.75433176036, 64741.95798313119],
    [0.00000000224, 5.82663546732, 52179.6876185064],
    [0.00000000164, 3.65486891804, 76.2660712756],
    [0.00000000166, 5.16708694657, 49957.0491789616],
    [0.00000000171, 1.99193197138, 26094.53170047421],
    [0.00000000159, 2.10978774324, 32370.9789915656],
    [0.00000000164, 5.82981713266, 12432.0426503978],
    [0.00000000155, 5.39879388941, 6681.2248533996],
    [0.00000000199, 3.05926705479, 66941.04532641819],
    [0.00000000171, 5.1352042366, 26081.27458267419],
    [0.0000000015, 0.90885651206, 52389.1053785864],
    [0.00000000184, 1.74487163243, 51962.5071877104],
    [0.00000000164, 0.91431121775, 52602.4044740244],
    [0.00000000138, 5.40226519416, 26011.6370702986],
    [0.00000000149, 2.17444239275, 52168.69273614759],
    [0.00000000184, 1.61828580097, 20760.4270331914],
    [0.00000000152, 0.96120452018, 53764.8791784322],
    [0.00000000146, 5.57207251195, 58458.88213313979],
    [0.0000000015, 3.58807734183, 88476.99497093359],
    [0.00000000124, 1.42633058836, 55618.3812281138],
    [0.00000000141, 1.44033578815, 5327.4761083828],
    [0.00000000126, 0.80278847447, 117873.36400788819],
    [0.00000000118, 3.91167705851, 19406.6782881746],
    [0.00000000117, 4.6811816248, 52182.9198301492],
    [0.0000000013, 3.12963980623, 38519.945791972],
    [0.00000000123, 2.9095927256, 52026.2430860138],
    [0.00000000114, 3.34729061863, 51109.31080595839],
    [0.00000000109, 0.37062017, 115674.27666460119],
    [0.00000000108, 5.35523619654, 46848.3301747656],
    [0.0000000012, 6.1589049848, 155468.036919256],
    [0.00000000105, 1.26949313866, 98068.53671630539],
    [0.00000000124, 5.59073645014, 74821.13447975718],
    [0.00000000113, 5.37283602123, 124778.18365871879],
    [0.00000000101, 1.50859657746, 157636.79740153858],
    [0.00000000112, 6.24044765899, 51123.53789995999],
    [0.00000000089, 0.66689996363, 103396.01282468818],
    [0.00000000088, 3.24234443321, 26727.8004278882],
    [0.00000000083, 3.46887356727, 77623.81213840858],
    [0.00000000082, 3.58489505049, 52329.58509363319],
    [0.00000000082, 2.7659872925, 35191.8101356918],
    [0.00000000092, 2.89919284588, 120226.23016165999],
    [0.00000000081, 3.34888362248, 52022.0274726636],
    [0.0000000008, 1.6180082693, 45494.58142974879],
    [0.00000000087, 5.99930110618, 129909.82474277639],
    [0.00000000075, 1.29165560989, 78283.37918562238],
    [0.00000000097, 0.94285631414, 85034.42002596818],
    [0.00000000075, 0.93132779667, 433.7117378768],
    [0.00000000087, 3.2929549456, 3340.6124266998],
    [0.00000000083, 4.56076128644, 419.4846438752],
    [0.0000000008, 0.2762726008, 105410.99449648599],
    [0.00000000079, 5.99645052852, 95247.70557217918],
    [0.00000000074, 0.63932580906, 64607.84893354619],
    [0.00000000066, 4.71152255697, 80482.46652890938],
    [0.00000000073, 3.21815072307, 52099.5402118728],
    [0.00000000066, 2.98683203711, 23754.70674870219],
    [0.00000000091, 2.50052149852, 104881.30353139139],
    [0.00000000062, 5.73156315784, 853.196381752],
    [0.00000000086, 4.13151425024, 313054.83769889036],
    [0.00000000064, 1.17129038283, 108903.56606335558],
    [0.00000000059, 0.79111914848, 7994.5284420242],
    [0.00000000065, 0.250685719, 71025.0338331226],
    [0.00000000057, 6.23642054033, 1692.1656695024],
    [0.00000000057, 4.67121384993, 28206.6670019526],
    [0.00000000059, 4.92822158961, 78050.41032928458],
    [0.00000000056, 2.09215892689, 76144.94556434419],
    [0.00000000056, 1.73304008242, 25654.19140369739],
    [0.00000000057, 4.73385475413, 155418.04029735178],
    [0.00000000056, 5.88720785632, 26037.90651966999],
    [0.00000000074, 5.46823409002, 78244.0396638228],
    [0.00000000061, 4.50066150046, 25668.418497699],
    [0.00000000071, 4.0685589567, 162188.75089859738],
    [0.00000000052, 2.74630211595, 131395.11544947958],
    [0.00000000055, 1.23376269855, 26137.8997634784],
    [0.00000000051, 4.16406216247, 78259.82808936459],
    [0.00000000048, 5.64584502444, 71492.99882347698],
    [0.00000000056, 2.21556357721, 151975.46535238638],
    [0.00000000052, 2.58403290426, 128850.44281258718],
    [0.00000000048, 2.53427528158, 130012.91751699499],
    [0.00000000045, 3.30208209778, 111590.2881578968],
    [0.00000000051, 2.59172476683, 78267.59076008058],
    [0.00000000047, 1.65481269433, 18093.37469954999],
    [0.00000000045, 4.61275436981, 2333.196392872],
    [0.00000000043, 4.08074925073, 1596.1864422846],
    [0.00000000042, 2.94276331302, 24395.7374720718],
    [0.00000000042, 4.02117925826, 78477.00852016058],
    [0.00000000056, 4.77237421864, 28421.0995344462],
    [0.00000000047, 6.11377086686, 93028.94846799239],
    [0.0000000004, 3.23768263734, 25234.70675982219],
    [0.00000000045, 5.03235979949, 78256.59587772179],
    [0.00000000053, 6.07709485433, 10021.8372800994],
    [0.0000000005, 5.81013134251, 90829.86112470538],
    [0.00000000038, 1.96485604602, 632.7837393132],
    [0.00000000051, 3.90465378478, 74.7815985673],
    [0.00000000036, 6.02764042024, 78114.14622758799],
    [0.00000000035, 0.19483010119, 77197.21394753258],
    [0.00000000038, 0.85372328004, 26237.46633870879],
    [0.00000000036, 3.61160802929, 48835.19385644859],
    [0.00000000036, 0.36428632576, 27154.3986187642],
    [0.00000000037, 2.58618864774, 51707.84129279399],
    [0.00000000047, 3.11077813997, 16066.0658614748],
    [0.00000000034, 5.90024410478, 103.0927742186],
    [0.00000000035, 1.89948168639, 52169.17772424839],
    [0.00000000035, 3.09037355598, 77211.44104153418],
    [0.00000000035, 5.86095139046, 18207.81398823521],
    [0.00000000038, 1.94104879109, 76044.9523205358],
    [0.00000000032, 1.45277855585, 78270.82297172339],
    [0.00000000044, 4.36195482299, 52643.7712735028],
    [0.00000000043, 0.13191769323, 1581.959348283],
    [0.00000000032, 4.70833495807, 71582.48457132299],
    [0.00000000037, 3.75248447021, 27140.17152476259],
    [0.00000000042, 2.3434121767, 84546.78527471398],
    [0.00000000031, 2.09939558148, 2648.454825473],
    [0.00000000033, 4.22087782315, 111122.32316754239],
    [0.00000000032, 5.93849066304, 51742.09454527159],
    [0.00000000037, 2.22778724531, 25973.46385288896],
    [0.00000000031, 0.06282672228, 536.8045120954],
    [0.0000000003, 0.17325551658, 224.3447957019],
    [0.0000000003, 4.46570213013, 81706.28436968799],
    [0.00000000029, 4.99680928394, 24491.71669928959],
    [0.00000000035, 5.04036468235, 52182.4348420484],
    [0.00000000033, 4.30956969733, 14477.3511832],
    [0.00000000039, 3.99296635763, 78690.30761559859],
    [0.00000000028, 3.41723065188, 7880.08915333899],
    [0.00000000039, 0.38970280197, 114564.89811250778],
    [0.00000000033, 3.85407359005, 143961.2671494624],
    [0.00000000029, 2.14304937049, 150866.08680029298],
    [0.00000000028, 4.95187621332, 956.2891559706],
    [0.00000000036, 4.89757043872, 26202.34243025941],
    [0.0000000003, 0.55025093927, 33967.99229491319],
    [0.00000000028, 1.52043005918, 40565.2543247742],
    [0.00000000027, 5.29884427476, 1162.4747044078],
    [0.00000000027, 3.44440418351, 141762.17980617538],
    [0.00000000035, 2.50821332798, 72936.23331633979],
    [0.00000000028, 0.83354394743, 42153.969003049],
    [0.00000000036, 4.02142487381, 79852.78232000639],
    [0.00000000026, 1.15352991801, 51322.60990139639],
    [0.00000000026, 0.13577439886, 22747.2907148744],
    [0.00000000027, 4.82379477303, 110.2063212194],
    [0.00000000025, 0.71097564554, 50483.640613646],
    [0.00000000024, 2.92248010137, 121335.60871375339],
    [0.00000000026, 4.56151347419, 183724.7005431128],
    [0.00000000024, 2.1654518097, 32769.1279949738],
    [0.00000000031, 2.33336639968, 51756.3216392732],
    [0.00000000032, 2.93016714121, 181555.94006083018],
    [0.00000000027, 4.32935860229, 124156.43985787958],
    [0.00000000023, 6.16949223424, 39743.7636327506],
    [0.00000000023, 2.77333133719, 155997.72788435058],
    [0.00000000022, 2.90047805068, 25863.55834587229],
    [0.00000000023, 0.26296960044, 103711.71527998279],
    [0.00000000022, 0.49237419293, 23439.44831610119],
    [0.00000000027, 2.77269830479, 24505.94379329119],
    [0.00000000022, 0.39938514656, 26164.1692128498],
    [0.00000000022, 0.07820939757, 78187.44335344699],
    [0.00000000022, 3.71330627735, 129483.91596626239],
    [0.00000000023, 5.63887355161, 522.5774180938],
    [0.00000000021, 3.36821177399, 1375.7737998458],
    [0.00000000029, 5.62929042847, 44181.27784112419],
    [0.00000000022, 4.35422573947, 26720.68688088739],
    [0.00000000021, 5.12497732226, 11610.5519583742],
    [0.00000000025, 5.36835518856, 26013.1215430069],
    [0.00000000024, 5.55813303813, 130969.20667296558],
    [0.0000000002, 4.79424075731, 25780.3455206046],
    [0.0000000002, 3.82740705898, 24925.4284371664],
    [0.0000000002, 4.26878389727, 25131.61398560359],
    [0.00000000021, 5.10505150441, 25977.69682035479],
    [0.0000000002, 3.32855955978, 131498.89763806018],
    [0.0000000002, 1.29805086237, 467.9649903544],
    [0.00000000023, 2.06377601353, 100909.03762133139],
    [0.00000000027, 4.46165349883, 316.3918696566],
    [0.00000000019, 2.33132135274, 26395.46076254379],
    [0.00000000019, 0.35229627877, 78417.48823520739],
    [0.00000000019, 2.86176933014, 50579.61984086379],
    [0.00000000018, 4.33826105585, 104371.28232719658],
    [0.00000000022, 1.69381062404, 106570.36967048359],
    [0.00000000021, 0.89581658307, 339142.7408404646],
    [0.00000000025, 5.95532312645, 146314.13330323418],
    [0.0000000002, 0.11725114676, 52815.7035694624],
    [0.00000000018, 1.66756826028, 23888.81579828719],
    [0.00000000022, 4.37150668135, 1478.8665740644],
    [0.00000000017, 4.39063105551, 60055.89543648739],
    [0.00000000017, 3.17668084118, 70269.18098269838],
    [0.00000000017, 1.74029229152, 104138.31347085879],
    [0.00000000017, 5.24411288462, 102232.84870591838],
    [0.00000000019, 0.11691865573, 78109.93061423779],
    [0.00000000017, 3.28697052824, 25565.3257234804],
    [0.00000000019, 0.84289230962, 188276.6540401716],
    [0.00000000018, 0.4725216389, 27999.1026247914],
    [0.00000000016, 2.8132092467, 52101.02468458109],
    [0.00000000016, 4.20710393311, 134991.4692049298],
    [0.00000000019, 0.54267379272, 50593.84693486539],
    [0.00000000015, 5.78613478653, 24712.1293417284],
    [0.00000000018, 2.23136091809, 104331.94280539699],
    [0.00000000016, 3.3095771758, 97112.93697469679],
    [0.00000000016, 1.02655918243, 26162.6847401415],
    [0.00000000015, 0.51501957594, 13362.4497067992],
    [0.00000000015, 5.44457668379, 28286.9904848612],
    [0.00000000015, 3.3369783926, 206.1855484372],
    [0.00000000015, 3.09319808895, 25984.8103673556],
    [0.00000000019, 5.95214817336, 29428.515568274],
    [0.00000000017, 1.6041139068, 26507.38778544939],
    [0.00000000016, 3.62113927445, 26610.48055966799],
    [0.00000000018, 4.55509949626, 51543.0225438352],
    [0.00000000016, 4.95762784074, 25771.5112719176],
    [0.00000000014, 0.1585359747, 647.0108333148],
    [0.00000000016, 3.53658275362, 25551.09862947879],
    [0.00000000013, 2.28786159405, 12725.453434775],
    [0.00000000016, 3.05451392033, 26190.99591579279],
    [0.00000000013, 5.81922389967, 157483.01859105378],
    [0.00000000013, 4.03160498458, 24356.7807886416],
    [0.00000000013, 4.49878848868, 29416.03879785439],
    [0.00000000016, 1.1438048243, 26404.2950112308],
    [0.00000000016, 4.77704247519, 24609.0365675098],
    [0.00000000013, 1.33944288754, 52808.59002246159],
    [0.00000000015, 1.50513017421, 181505.94343892598],
    [0.00000000012, 0.92918175452, 104347.73123093879],
    [0.00000000014, 2.44451494167, 26421.7590823436],
    [0.00000000012, 1.66798607577, 51013.33157874059],
    [0.00000000012, 4.24892890325, 52225.8029050526],
    [0.00000000014, 4.68967753702, 25754.0472008048],
    [0.00000000013, 0.63063491269, 51639.00177105299],
    [0.00000000013, 0.51980975221, 51951.46148744649],
    [0.00000000013, 0.11999669275, 26294.08869001139],
    [0.00000000012, 5.63990253843, 104355.49390165479],
    [0.00000000013, 0.3727147952, 74923.09699802278],
    [0.00000000015, 2.19958896111, 22759.76748529401],
    [0.00000000013, 1.47842980598, 54294.57014352679],
    [0.00000000012, 3.10508217703, 27819.0254945068],
    [0.00000000011, 2.42209220629, 97580.90196505119],
    [0.00000000013, 2.58513127775, 116917.76426627958],
    [0.00000000011, 4.76885794954, 49527.35145767539],
    [0.00000000011, 3.92593978045, 26521.614879451],
    [0.00000000011, 2.89444277066, 119116.85160956658],
    [0.00000000012, 5.58737020094, 25881.717593137],
    [0.00000000013, 5.5953722056, 156100.82065856917],
    [0.00000000012, 2.01299993075, 51219.51712717779],
    [0.00000000011, 0.99253734697, 25455.119402261],
    [0.00000000014, 5.68122574937, 154938.34595416137],
    [0.00000000015, 5.27886514517, 178063.3684939606],
    [0.00000000014, 6.12654802167, 52278.89905736699],
    [0.00000000011, 0.06908636848, 52072.71350892979],
    [0.00000000011, 0.8098222874, 104564.91166173479],
    [0.00000000013, 3.96505351243, 68241.8721446232],
    [0.00000000011, 2.65559265085, 52125.80966124419],
    [0.00000000012, 6.26057108211, 24176.703658357],
    [0.00000000012, 1.73021765373, 104344.49901929598],
    [0.0000000001, 2.77364193598, 77829.99768684579],
    [0.0000000001, 2.83314383566, 104202.04936916218],
    [0.0000000001, 4.05963464737, 26089.38761428249],
    [0.00000000012, 5.40316858194, 110634.68841628819],
    [0.0000000001, 6.17247219966, 103299.34418310839],
    [0.0000000001, 0.02153234343, 137678.191299471],
    [0.00000000012, 2.25188175428, 52065.59996192899],
    [0.0000000001, 3.11650831039, 26086.4186688659],
    [0.0000000001, 3.27287049435, 103285.11708910679],
    [0.0000000001, 1.38532261128, 25446.4895798352],
    [0.00000000012, 1.52019007531, 54509.0026760204],
    [0.00000000011, 6.21574870463, 61279.713277266],
    [0.00000000009, 0.49710408415, 2221.856634597],
    [0.00000000009, 2.88821691711, 90695.75207512038],
    [0.00000000011, 2.16522629249, 26624.70765366959],
    [0.00000000009, 4.80391342687, 27311.72098235281],
    [0.00000000009, 4.23373474411, 52250.5878817157],
    [0.00000000009, 5.7443725917, 26729.31670331319],
    [0.0000000001, 3.4751748596, 140652.80125408198],
    [0.0000000001, 2.80299508279, 55516.4187098482],
    [0.00000000013, 4.07250716348, 34282.1784747828],
    [0.00000000009, 0.66918270135, 52698.38370124219],
    [0.0000000001, 5.43273059228, 126996.94076290558],
    [0.00000000009, 1.51413989531, 97670.38771289718],
    [0.0000000001, 1.0794428116, 742.9900605326],
    [0.00000000009, 3.33909678408, 1911.1994832172],
    [0.00000000009, 6.28167845492, 147423.51185532758],
    [0.0000000001, 0.71259250113, 137210.22630911658],
    [0.00000000009, 3.57005441415, 50800.03248330259],
    [0.00000000009, 5.50160718751, 2199.087343287],
    [0.00000000009, 2.08845571909, 51859.41441349179],
    [0.00000000009, 4.25308230419, 26222.0121911592],
    [0.00000000009, 2.50157520492, 24864.08530079559],
    [0.00000000008, 2.47794653703, 25440.89230825939],
    [0.00000000009, 2.85482376043, 25953.79409198919],
    [0.00000000008, 2.29776576843, 23866.04650697719],
    [0.00000000009, 0.78685007135, 104778.21075717278],
    [0.00000000008, 4.62944551319, 52492.19815280499],
    [0.00000000009, 5.48506768547, 77844.22478084739],
    [0.0000000001, 1.12934836943, 78731.674415077],
    [0.00000000008, 2.595492679, 26941.0995233262],
    [0.00000000008, 4.95780242181, 78257.08086582259],
    [0.00000000008, 2.55696609752, 17893.6278083656],
    [0.00000000008, 4.52002369897, 104358.72611329758],
    [0.00000000008, 3.82529998469, 76571.54375522019],
    [0.0000000001, 2.73498400513, 323.5054166574],
    [0.00000000009, 1.57363188943, 24998.19435038059],
    [0.00000000008, 0.65301230309, 8194.2753332086],
    [0.00000000008, 4.30691637723, 77410.51304297059],
    [0.00000000008, 5.61648727808, 77795.74443436819],
    [0.00000000009, 2.56370604921, 50696.93970908399],
    [0.00000000008, 5.53494196837, 2008.557539159],
    [0.00000000009, 0.81310827208, 105940.68546158058],
    [0.00000000008, 3.03053180726, 27780.06881107659],
    [0.00000000008, 1.09072579794, 949.1756089698],
    [0.00000000008, 5.21537078773, 176953.98994186718],
    [0.00000000008, 2.88040588282, 36109.7404216736],
    [0.00000000008, 3.90879186991, 54087.0057663656],
    [0.00000000007, 2.09304055777, 25344.9130810416],
    [0.00000000007, 3.77982679537, 19.66976089979],
    [0.00000000008, 2.01169539344, 31415.379249957],
    [0.00000000008, 6.01136820214, 207643.8432024044],
    [0.00000000008, 6.24227744862, 38813.3565763492],
    [0.00000000008, 1.33108336808, 55503.94193942859],
    [0.00000000007, 3.30804741677, 23919.1426592916],
    [0.00000000008, 3.48746520229, 53242.3017603384],
    [0.00000000008, 5.56477337187, 27177.6119327678],
    [0.00000000009, 5.00034866965, 102132.85546210999],
    [0.00000000007, 0.40751314845, 2111.6503133776],
    [0.00000000008, 1.66471235682, 52290.24557183361],
    [0.00000000007, 0.77215567463, 26073.67604757259],
    [0.00000000007, 5.32306426879, 52595.29092702359],
    [0.00000000007, 2.57023734016, 24448.8336243862],
    [0.00000000007, 1.40330361432, 150244.3429994538],
    [0.00000000008, 3.96541390761, 52325.36948028299],
    [0.00000000008, 0.64215744063, 53228.07466633679],
    [0.00000000007, 5.40994893955, 25508.2155545754],
    [0.00000000009, 0.63097343517, 170049.1702910366],
    [0.00000000006, 2.73735624509, 153.7788104848],
    [0.00000000006, 1.57808561874, 49842.60989027639],
    [0.00000000006, 5.85639973088, 182085.63102592478],
    [0.00000000007, 1.22602076365, 107794.1875112622],
    [0.00000000007, 2.99828544115, 22625.658435709],
    [0.00000000007, 3.38113527243, 12546.481939083],
    [0.00000000006, 5.9882473657, 76667.52298243798],
    [0.00000000007, 2.75252330601, 172402.0364448084],
    [0.00000000007, 0.93184314111, 3328.13565628019],
    [0.00000000006, 2.72361970528, 26709.6469424134],
    [0.00000000008, 1.81192469081, 78270.3379836226],
    [0.00000000006, 2.31595886989, 157057.10981453978],
    [0.00000000006, 1.73557063122, 26667.590728573],
    [0.00000000006, 4.37863242786, 25466.159340735],
    [0.00000000006, 3.194031607, 104275.34649502118],
    [0.00000000006, 1.09823646265, 25867.49049913539],
    [0.00000000007, 0.1123605384, 25764.39772491679],
    [0.00000000007, 5.69537766284, 66653.15746634839],
    [0.00000000007, 1.98238737869, 846.0828347512],
    [0.00000000006, 0.65894058731, 116783.65521669458],
    [0.00000000005, 4.66761334131, 2125.8774073792],
    [0.00000000006, 4.52221761723, 27726.9726587622],
    [0.00000000006, 0.0984022742, 167850.0829477496],
    [0.00000000006, 3.36608415071, 129799.61842155698],
    [0.00000000007, 5.27549434329, 52061.36699446317],
    [0.00000000007, 1.32305784951, 209812.60368468694],
    [0.00000000006, 3.60884349448, 78903.60671103658],
    [0.00000000005, 3.76183094594, 28256.66362385679],
    [0.00000000006, 5.26397966812, 75930.51303185058],
    [0.00000000006, 3.23097479261, 27669.86248985719],
    [0.00000000005, 5.68060753615, 1265.5674786264],
    [0.00000000005, 3.87273283224, 214364.55718174577],
    [0.00000000005, 3.93047654027, 365230.6439820388],
    [0.00000000006, 2.60562458198, 44295.7171298094],
    [0.00000000005, 1.56438384826, 60370.08161635699],
    [0.00000000005, 0.91437456221, 27684.0895838588],
    [0.00000000005, 2.78304413268, 25169.9728555924],
    [0.00000000006, 5.76131236705, 58857.03113654799],
    [0.00000000005, 2.67085954875, 38.1330356378],
    [0.00000000006, 0.50453577398, 155571.81910783658],
    [0.00000000005, 3.86250449828, 52381.99183158559],
    [0.00000000005, 4.32361771821, 27005.83342755599],
    [0.00000000005, 1.6378330646, 34082.4315835984],
    [0.00000000006, 4.13235037436, 29550.14784743939],
    [0.00000000005, 0.09069856194, 13541.42120249119],
    [0.00000000005, 5.50663993071, 26402.0893214438],
    [0.00000000004, 5.2255426593, 28736.3579670472],
    [0.00000000005, 5.88997457155, 78188.92782615528],
    [0.00000000005, 1.29427545799, 77630.92568540938],
    [0.00000000006, 3.65818107099, 76681.75007643958],
    [0.00000000005, 1.59378640261, 25773.71696170459],
    [0.00000000005, 5.53985466815, 24203.0019781568],
    [0.00000000005, 1.10121885185, 130459.18546877075],
    [0.00000000005, 3.5586675942, 52252.07235442399],
    [0.00000000004, 5.49843651098, 52712.61079524379],
    [0.00000000005, 3.39959787962, 104505.39137678158],
    [0.00000000005, 1.94175393423, 1272.6810256272],
    [0.00000000004, 0.58115883263, 26118.2300025786],
    [0.00000000004, 0.54682947961, 157586.80077963436],
    [0.00000000004, 2.04212740892, 148.0787244263],
    [0.00000000005, 1.64853656178, 26198.1094627936],
    [0.00000000005, 0.18946812001, 1.4844727083],
    [0.00000000004, 5.04774492766, 112231.70171963578],
    [0.00000000004, 3.24889530044, 26312.2479372761],
    [0.00000000005, 2.14793916248, 128320.75184749259],
    [0.00000000004, 3.0368101954, 151.0476698429],
    [0.00000000004, 0.23608219351, 26057.57628056979],
    [0.00000000004, 2.78449581166, 25138.7275326044],
    [0.00000000004, 1.74750321635, 27044.1922975448],
    [0.00000000004, 5.26585590029, 138319.60486120995],
    [0.00000000004, 2.16361705057, 78366.80219894118],
    [0.00000000005, 1.86438708559, 51653.22886505459],
    [0.00000000004, 3.67745684549, 148532.89040742096],
    [0.00000000005, 3.36418574107, 86457.98475793119],
    [0.00000000004, 4.39817949768, 78896.49316403578],
    [0.00000000004, 3.16495363173, 104197.83375581198],
    [0.00000000004, 5.96720583626, 1485.9801210652],
    [0.00000000003, 3.62369510287, 51852.30086649099],
    [0.00000000004, 4.95850373202, 80382.47328510099],
    [0.00000000003, 0.24273955075, 128106.31931499895],
    [0.00000000004, 6.09423095974, 51528.79544983359],
    [0.00000000004, 2.26832726016, 64901.25971792339],
    [0.00000000004, 5.37231956323, 99024.13645791399],
    [0.00000000004, 5.83099981006, 26411.4085582316],
    [0.00000000003, 5.2787705071, 14.2270940016],
    [0.00000000004, 1.01079656557, 16703.062133499],
    [0.00000000003, 5.29624442233, 51432.81622261579],
    [0.00000000003, 1.99372517333, 9384.8410080752],
    [0.00000000003, 1.08549694329, 92741.06060792258],
    [0.00000000004, 2.61532511231, 27250.37784598199],
    [0.00000000004, 3.8438424623, 65831.6667743248],
    [0.00000000004, 5.07647835306, 118828.96374949679],
    [0.00000000004, 0.9569156196, 1795.258443721],
    [0.00000000003, 4.56071055194, 130419.8459469712],
    [0.00000000004, 3.21002699852, 51969.62073471119],
    [0.00000000003, 0.53542089836, 25985.94062330859],
    [0.00000000003, 0.86346795613, 27972.80430499159],
    [0.00000000004, 1.1185037385, 52609.51802102519],
    [0.00000000003, 5.13697350283, 26189.8656598398],
    [0.00000000003, 3.83162907268, 207593.8465805002],
    [0.00000000003, 3.70405700948, 193937.9860893238],
    [0.00000000003, 1.82907554275, 153084.84390447979],
    [0.00000000003, 1.75677414102, 158746.17595363196],
    [0.00000000003, 0.34579536632, 161079.37234650398],
    [0.00000000003, 3.85483830173, 39629.32434406539],
    [0.00000000003, 0.82694378727, 51868.2486621788],
    [0.00000000003, 0.1632806981, 27463.67694142],
    [0.00000000003, 4.08971647963, 130226.21661243298],
    [0.00000000004, 3.70176043302, 163766.0944410452],
    [0.00000000003, 1.31853873267, 204151.27163553477],
    [0.00000000004, 2.50849600287, 220.4126424388],
    [0.00000000003, 3.29076294593, 125112.03959948818],
    [0.00000000003, 5.82527117029, 49953.94964855139],
    [0.00000000003, 1.83258674312, 37698.4550999484],
    [0.00000000003, 1.84707936363, 26076.8574413103],
    [0.00000000003, 3.96840940578, 130432.40216087017],
    [0.00000000003, 0.01192870778, 26098.9488418381],
    [0.00000000003, 2.24128507678, 78160.61665050399],
    [0.00000000003, 1.67457691866, 182188.72380014337],
    [0.00000000003, 1.36021422148, 136722.59155786238],
];

const Z1: &[Term] = &[
    [0.00172388569, 3.47961470688, 26087.9031415742],
    [0.00084745328, PI, 0.0],
    [0.00004790619, 6.21921644635, 52175.8062831484],
    [0.000013591, 0.49329143004, 78263.70942472259],
    [0.00000602217, 3.41138035633, 104351.61256629678],
    [0.00000191001, 0.14519065991, 130439.51570787099],
    [0.00000055361, 3.18058121998, 156527.41884944518],
    [0.00000015488, 6.22255945229, 182615.3219910194],
    [0.00000010854, 0.29329316365, 27197.2816936676],
    [0.00000004262, 2.98444809115, 208703.2251325936],
    [0.00000004999, 0.56827577867, 24978.5245894808],
    [0.00000002282, 2.87281226699, 31749.2351907264],
    [0.000000025, 3.3746410202, 53285.1848352418],
    [0.0000000148, 3.59930190722, 51066.427731055],
    [0.00000001163, 6.03119799366, 234791.12827416777],
    [0.00000001151, 1.94233400975, 51116.4243529592],
    [0.00000000808, 0.63296975442, 25028.521211385],
    [0.00000000781, 1.83801930165, 5661.3320491522],
    [0.00000000676, 4.44275341808, 27043.5028831828],
    [0.00000000873, 3.99274661843, 21535.9496445154],
    [0.00000000636, 0.60897167697, 20426.571092422],
    [0.00000000538, 5.92697698725, 57837.1383323006],
    [0.00000000528, 1.89223267777, 1059.3819301892],
    [0.00000000503, 4.12049535056, 47623.8527860896],
    [0.0000000045, 6.08529735298, 529.6909650946],
    [0.00000000553, 2.50090977683, 1109.3785520934],
    [0.00000000445, 0.35693140869, 77154.33087262919],
    [0.00000000459, 0.10915184787, 79373.087976816],
    [0.0000000037, 2.24953657104, 10213.285546211],
    [0.00000000414, 3.0145020138, 26107.57290247399],
    [0.00000000417, 5.3140240737, 37410.5672398786],
    [0.00000000306, 3.10769212775, 25558.2121764796],
    [0.00000000316, 2.79570706285, 260879.03141574195],
    [0.00000000296, 4.12556468959, 26068.2333806744],
    [0.00000000332, 5.93758113684, 26084.0218062162],
    [0.00000000234, 3.03370038245, 25132.3033999656],
    [0.0000000025, 1.18440188253, 26091.7844769322],
    [0.00000000215, 1.41611963529, 41962.5207369374],
    [0.00000000206, 4.97267994525, 77204.32749453338],
    [0.00000000208, 5.60196522278, 4551.9534970588],
    [0.00000000251, 3.12319370712, 30639.856638633],
    [0.0000000023, 0.9586211279, 50586.73338786459],
    [0.00000000193, 4.90260211702, 13521.7514415914],
    [0.00000000243, 0.3011232033, 1589.0728952838],
    [0.00000000186, 5.87650538684, 39609.6545831656],
    [0.00000000211, 1.27593674125, 53131.406024757],
    [0.00000000188, 0.09339135236, 28306.66024576099],
    [0.00000000191, 4.77084065304, 51646.11531805379],
    [0.00000000167, 2.62739427985, 32858.61374281979],
    [0.00000000162, 5.02172677195, 15874.6175953632],
    [0.0000000014, 1.37984211372, 51749.20809227239],
    [0.00000000134, 0.57882342916, 23869.1460373874],
    [0.00000000132, 3.40338891449, 103242.2340142034],
    [0.00000000144, 4.41836879515, 22645.32819660879],
    [0.00000000143, 5.55896069473, 25661.3049506982],
    [0.00000000131, 2.17510821075, 63498.47038145279],
    [0.00000000143, 1.22805602725, 46514.4742339962],
    [0.00000000136, 2.45569156259, 24498.8302462904],
    [0.0000000012, 2.89969435814, 7.1135470008],
    [0.00000000104, 0.89744950821, 73711.75592766379],
    [0.00000000119, 1.4401455439, 43071.8992890308],
    [0.00000000126, 1.93369301602, 14765.2390432698],
    [0.00000000107, 4.29215813932, 19317.1925403286],
    [0.00000000089, 5.84175706917, 51220.20654153979],
    [0.00000000093, 2.27928877976, 19804.8272915828],
    [0.00000000083, 3.1718841574, 29530.4780865396],
    [0.00000000076, 5.10839374532, 36301.18868778519],
    [0.00000000079, 2.34370769368, 1052.2683831884],
    [0.0000000008, 2.11190196063, 426.598190876],
    [0.00000000076, 6.05836593763, 52195.47604404819],
    [0.00000000072, 1.89073508118, 1066.49547719],
    [0.00000000082, 3.03552784633, 3442.5749449654],
    [0.00000000075, 3.11962204135, 105460.99111839019],
    [0.00000000086, 5.84461147075, 286966.9345573162],
    [0.00000000069, 1.89458844998, 27147.28507176339],
    [0.00000000089, 4.1090471636, 72602.37737557039],
    [0.00000000077, 5.3499044136, 213.299095438],
    [0.00000000087, 5.53929952701, 9103.9069941176],
    [0.0000000007, 4.43072071341, 639.897286314],
    [0.00000000059, 3.32089922507, 54394.56338733519],
    [0.00000000061, 0.53721787795, 25035.6347583858],
    [0.00000000062, 1.36724381328, 6283.0758499914],
    [0.00000000073, 6.16650137658, 56727.7597802072],
    [0.00000000069, 0.88932506586, 52156.1365222486],
    [0.00000000055, 2.54693938612, 65697.55772473979],
    [0.00000000061, 2.7020878278, 52171.9249477904],
    [0.00000000058, 3.90075823666, 76674.63652943878],
    [0.00000000064, 6.09232375776, 26080.78959457339],
    [0.00000000052, 2.85118534529, 16983.9961474566],
    [0.00000000063, 5.90351345253, 58946.51688439399],
    [0.00000000052, 1.08065292487, 25021.4076643842],
    [0.0000000005, 5.9840375581, 955.5997416086],
    [0.0000000005, 2.34891444356, 51535.90899683439],
    [0.00000000048, 4.15049070651, 12566.1516999828],
    [0.00000000047, 3.35524401909, 52168.69273614759],
    [0.0000000006, 3.40462418234, 25874.6040461362],
    [0.00000000059, 4.98660394607, 6770.7106012456],
    [0.00000000065, 1.57121191195, 52705.49724824299],
    [0.00000000055, 5.05311644127, 53235.18821333759],
    [0.00000000056, 4.79703863542, 25448.00585526019],
    [0.00000000045, 3.87928453463, 48733.23133818299],
    [0.00000000054, 2.11712920969, 33326.5787331742],
    [0.00000000044, 2.58011573987, 2218.7571041868],
    [0.00000000057, 4.23895384399, 52179.6876185064],
    [0.00000000042, 2.38859796348, 83925.0414738748],
    [0.0000000004, 5.07476924931, 51109.31080595839],
    [0.00000000039, 0.16837719613, 129330.13715577759],
    [0.00000000041, 5.06879737373, 59414.4818747484],
    [0.00000000045, 0.7450772397, 2118.7638603784],
    [0.00000000045, 3.04665350718, 27676.976036858],
    [0.00000000039, 4.7015835454, 69159.80243060499],
    [0.00000000041, 5.93310326966, 26095.016688575],
    [0.00000000031, 3.3343247504, 45892.73043315699],
    [0.0000000003, 2.52574953749, 77308.10968311399],
    [0.00000000032, 3.64034199518, 49957.0491789616],
    [0.0000000003, 1.16170502578, 26301.2022370122],
    [0.00000000039, 4.76885068068, 40853.142184844],
    [0.0000000003, 3.03342131333, 52182.9198301492],
    [0.00000000033, 2.00778363573, 7238.6755916],
    [0.00000000034, 0.83933724452, 98690.28051714458],
    [0.00000000028, 2.06072938372, 25934.1243310894],
    [0.00000000033, 4.21710497504, 79219.3091663312],
    [0.00000000026, 4.99085554385, 38519.945791972],
    [0.00000000026, 6.08273991212, 18849.2275499742],
    [0.00000000025, 4.07659089438, 26617.5941066688],
    [0.00000000024, 4.39675973371, 77837.11123384659],
    [0.0000000003, 0.25587368521, 50057.04242277],
    [0.00000000024, 1.03737813626, 45405.0956819028],
    [0.00000000024, 1.77374954914, 13655.8604911764],
    [0.00000000026, 1.35857651349, 77734.01845962799],
    [0.00000000028, 4.5122769446, 78793.40038981718],
    [0.00000000024, 2.9189114427, 82815.66292178139],
    [0.00000000021, 5.13585062761, 89586.37352302698],
    [0.00000000024, 0.58794385685, 11322.6640983044],
    [0.00000000028, 1.99718125621, 23969.1392811958],
    [0.00000000022, 6.06219672387, 419.4846438752],
    [0.0000000002, 5.52785966186, 433.7117378768],
    [0.00000000028, 4.50140690236, 51123.53789995999],
    [0.0000000002, 4.37342000676, 68050.42387851159],
    [0.00000000019, 6.20105117352, 55618.3812281138],
    [0.00000000023, 2.61451042759, 313054.83769889036],
    [0.00000000018, 4.29485153949, 23754.70674870219],
    [0.00000000022, 1.87766446801, 79323.09135491178],
    [0.0000000002, 1.07656223897, 25619.9381512198],
    [0.00000000016, 1.03604660588, 12432.0426503978],
    [0.00000000016, 3.43674109707, 25654.19140369739],
    [0.0000000002, 2.97083013896, 110012.94461544899],
    [0.00000000017, 4.43931851455, 38654.05484155699],
    [0.00000000015, 2.81279895693, 78283.37918562238],
    [0.00000000018, 3.78270508656, 25973.46385288896],
    [0.00000000018, 5.12059646549, 52389.1053785864],
    [0.00000000017, 2.85670047821, 25668.418497699],
    [0.00000000018, 3.9418426361, 78244.0396638228],
    [0.00000000016, 1.58918523327, 66941.04532641819],
    [0.00000000013, 2.50556550656, 1596.1864422846],
    [0.00000000013, 6.23648492936, 80482.46652890938],
    [0.00000000015, 1.01343393682, 78267.59076008058],
    [0.00000000013, 5.74551369637, 78259.82808936459],
    [0.00000000013, 5.49092142595, 77623.81213840858],
    [0.00000000015, 3.65531240129, 853.196381752],
    [0.00000000016, 3.34679351675, 26202.34243025941],
    [0.00000000012, 4.99331123174, 27154.3986187642],
    [0.00000000012, 0.15067899984, 78256.59587772179],
    [0.00000000012, 1.2374498033, 26727.8004278882],
    [0.00000000012, 1.88171610012, 77197.21394753258],
    [0.00000000016, 1.02871649406, 74821.13447975718],
    [0.00000000014, 6.00648288256, 53764.8791784322],
    [0.00000000011, 1.0366486614, 51962.5071877104],
    [0.00000000012, 0.48930963657, 102762.53967101299],
    [0.00000000012, 3.21811087935, 155418.04029735178],
    [0.00000000012, 1.85815756639, 103292.23063610759],
    [0.00000000012, 3.87370634811, 124778.18365871879],
    [0.00000000011, 1.35784311134, 51742.09454527159],
    [0.00000000011, 2.25817150238, 44937.1306915484],
    [0.00000000012, 2.64551987584, 26137.8997634784],
    [0.00000000011, 2.75252916894, 26514.5013324502],
    [0.0000000001, 5.54274166657, 103396.01282468818],
    [0.00000000009, 6.12478323746, 78270.82297172339],
    [0.00000000013, 5.85664456058, 136100.84775702318],
    [0.00000000011, 2.43318609972, 85034.42002596818],
    [0.00000000011, 2.32000962427, 64607.84893354619],
    [0.00000000013, 3.22527913647, 28421.0995344462],
    [0.00000000009, 0.40604041041, 24491.71669928959],
    [0.00000000011, 1.88427152362, 1581.959348283],
    [0.00000000009, 1.56488206261, 129380.13377768178],
    [0.00000000009, 3.73371803074, 99799.65906923798],
    [0.00000000009, 3.14695429609, 2333.196392872],
    [0.0000000001, 1.21339698089, 104881.30353139139],
    [0.00000000009, 1.39539227982, 77211.44104153418],
    [0.00000000008, 4.87898553246, 632.7837393132],
    [0.00000000009, 5.97666796617, 131548.89425996438],
    [0.00000000008, 5.63267469085, 7994.5284420242],
    [0.00000000008, 0.82184344341, 46848.3301747656],
    [0.00000000008, 3.94765597932, 25455.119402261],
    [0.0000000001, 5.48154668085, 27140.17152476259],
    [0.00000000009, 3.19254939333, 76144.94556434419],
    [0.00000000007, 4.7190982878, 536.8045120954],
    [0.00000000008, 5.5231494187, 52602.4044740244],
    [0.00000000008, 3.24434973969, 51322.60990139639],
    [0.0000000001, 6.10170513742, 32370.9789915656],
    [0.00000000007, 5.95089721308, 108903.56606335558],
    [0.00000000008, 0.41129689957, 76044.9523205358],
    [0.00000000009, 1.20083825078, 64741.95798313119],
    [0.00000000007, 4.12190282008, 71492.99882347698],
    [0.00000000008, 4.96879374914, 105410.99449648599],
    [0.00000000008, 4.56629366973, 26037.90651966999],
    [0.00000000007, 0.70887703358, 24505.94379329119],
    [0.00000000007, 4.46371843319, 50579.61984086379],
    [0.00000000008, 5.56132218876, 62389.09182935939],
    [0.00000000007, 3.12746642701, 18093.37469954999],
    [0.00000000007, 4.6881605311, 52026.2430860138],
    [0.00000000007, 0.17502761083, 35191.8101356918],
    [0.00000000008, 5.48340707498, 25234.70675982219],
    [0.00000000007, 4.34617041823, 18207.81398823521],
    [0.00000000006, 2.06324851601, 78477.00852016058],
    [0.00000000006, 3.48502574572, 26094.53170047421],
    [0.00000000008, 2.34450938553, 33967.99229491319],
    [0.00000000006, 0.49326410196, 5327.4761083828],
    [0.00000000007, 1.20744112899, 44181.27784112419],
    [0.00000000006, 4.73779414587, 647.0108333148],
    [0.00000000007, 0.69979076833, 51756.3216392732],
    [0.00000000006, 5.63847965133, 339142.7408404646],
    [0.00000000008, 3.68367545759, 28206.6670019526],
    [0.00000000006, 0.34516328945, 26081.27458267419],
    [0.00000000006, 2.90716455101, 81706.28436968799],
    [0.00000000007, 2.12491220048, 88476.99497093359],
    [0.00000000005, 3.34028647657, 45494.58142974879],
    [0.00000000005, 4.65551599269, 93028.94846799239],
    [0.00000000005, 5.37501413358, 26610.48055966799],
    [0.00000000006, 0.8129987227, 95247.70557217918],
    [0.00000000005, 3.47000694038, 26507.38778544939],
    [0.00000000006, 3.28193656342, 26241.681952059],
    [0.00000000006, 4.64447087045, 155468.036919256],
    [0.00000000006, 4.82010175617, 94138.32702008578],
    [0.00000000006, 1.3205312469, 2648.454825473],
    [0.00000000005, 3.22819989009, 25938.3399444396],
    [0.00000000005, 2.61718935389, 162188.75089859738],
    [0.00000000005, 0.67832900959, 104331.94280539699],
    [0.00000000004, 5.21344084187, 71025.0338331226],
    [0.00000000004, 4.01714451988, 78050.41032928458],
    [0.00000000004, 5.08291206251, 52099.5402118728],
    [0.00000000004, 4.09094572411, 104355.49390165479],
    [0.00000000005, 4.64872616599, 26190.99591579279],
    [0.00000000005, 5.32437142333, 25551.09862947879],
    [0.00000000004, 2.72976343615, 79852.78232000639],
    [0.00000000004, 4.86893081526, 50593.84693486539],
    [0.00000000004, 0.65479452219, 150866.08680029298],
    [0.00000000004, 5.05003950789, 7880.08915333899],
    [0.00000000005, 0.56998430384, 522.5774180938],
    [0.00000000004, 2.18434126488, 51639.00177105299],
    [0.00000000004, 5.16982498302, 149.5631971346],
    [0.00000000004, 4.45668113275, 52815.7035694624],
    [0.00000000004, 0.69135494074, 22759.76748529401],
    [0.00000000004, 1.45087522595, 20760.4270331914],
    [0.00000000003, 2.2434548086, 26521.614879451],
    [0.00000000004, 1.44955412166, 120226.23016165999],
    [0.00000000004, 0.16879575063, 29416.03879785439],
    [0.00000000003, 4.57090150345, 103299.34418310839],
    [0.00000000003, 4.59598906499, 39743.7636327506],
    [0.00000000004, 2.57869053238, 42153.969003049],
    [0.00000000004, 0.10237777214, 52290.24557183361],
    [0.00000000003, 5.55031090013, 3340.6124266998],
    [0.00000000004, 6.17863510125, 26555.8681319286],
    [0.00000000003, 4.17269750233, 130969.20667296558],
    [0.00000000003, 4.68682814951, 129909.82474277639],
    [0.00000000004, 2.02800775775, 53242.3017603384],
    [0.00000000003, 5.35296159846, 91785.46086631398],
    [0.00000000003, 2.90685522022, 104358.72611329758],
    [0.00000000003, 3.88120838753, 24864.08530079559],
    [0.00000000003, 3.64751061524, 26011.6370702986],
    [0.00000000003, 3.23195009997, 27311.72098235281],
    [0.00000000003, 5.88557504342, 104371.28232719658],
    [0.00000000004, 3.12210700112, 22747.2907148744],
    [0.00000000004, 0.6420455709, 105307.21230790539],
    [0.00000000003, 6.24152399429, 181505.94343892598],
    [0.00000000004, 4.13065969197, 125887.56221081219],
    [0.00000000004, 4.45779901612, 10021.8372800994],
    [0.00000000004, 4.30265545797, 90829.86112470538],
    [0.00000000003, 2.25871507982, 129483.91596626239],
    [0.00000000003, 4.48812754789, 77829.99768684579],
    [0.00000000003, 1.95423245378, 103821.92160120218],
    [0.00000000003, 2.31574317697, 53228.07466633679],
    [0.00000000003, 5.16799762022, 52022.0274726636],
    [0.00000000003, 0.00175159073, 54509.0026760204],
    [0.00000000004, 1.27199373061, 85502.38501632259],
    [0.00000000003, 2.62911266804, 100909.03762133139],
    [0.00000000003, 5.08550718888, 13362.4497067992],
    [0.00000000004, 0.3542919014, 26624.70765366959],
    [0.00000000003, 5.11624187785, 206.1855484372],
    [0.00000000003, 1.69621650635, 131498.89763806018],
    [0.00000000003, 3.1154143265, 106570.36967048359],
    [0.00000000003, 3.95256477489, 77844.22478084739],
    [0.00000000002, 0.69658812162, 6681.2248533996],
    [0.00000000003, 3.36003785702, 128850.44281258718],
    [0.00000000003, 0.51920338716, 26941.0995233262],
    [0.00000000003, 6.07817701344, 1478.8665740644],
    [0.00000000002, 5.59272300692, 27684.0895838588],
    [0.00000000003, 0.55085259267, 52061.36699446317],
    [0.00000000002, 5.99908279167, 98068.53671630539],
    [0.00000000002, 4.99656134147, 103285.11708910679],
    [0.00000000003, 3.71061275134, 90695.75207512038],
    [0.00000000002, 5.8603121477, 111122.32316754239],
    [0.00000000003, 5.17758096862, 114564.89811250778],
    [0.00000000003, 2.34733115087, 78690.30761559859],
    [0.00000000002, 5.09808138852, 76.2660712756],
    [0.00000000002, 5.31294016066, 104564.91166173479],
    [0.00000000002, 0.9845994656, 97580.90196505119],
    [0.00000000003, 5.89794789328, 49527.35145767539],
    [0.00000000003, 3.28062974222, 104344.49901929598],
    [0.00000000003, 2.42068250003, 103711.71527998279],
    [0.00000000002, 1.05901421415, 51543.0225438352],
    [0.00000000002, 5.70093401914, 117873.36400788819],
    [0.00000000002, 3.31505268739, 58458.88213313979],
    [0.00000000003, 0.82349684851, 151975.46535238638],
    [0.00000000002, 1.52195733318, 181555.94006083018],
    [0.00000000003, 2.24270782677, 25565.3257234804],
    [0.00000000003, 5.23472870141, 60055.89543648739],
    [0.00000000002, 4.19499586662, 956.2891559706],
    [0.00000000002, 0.43182759927, 1162.4747044078],
    [0.00000000002, 1.55169232531, 52329.58509363319],
    [0.00000000002, 5.54133200346, 188276.6540401716],
    [0.00000000002, 1.63007261166, 26294.08869001139],
    [0.00000000002, 4.84459398809, 70269.18098269838],
    [0.00000000002, 2.45157941038, 52698.38370124219],
    [0.00000000002, 3.50351080444, 102132.85546210999],
    [0.00000000002, 1.28285332683, 115674.27666460119],
    [0.00000000002, 1.03461044928, 31415.379249957],
    [0.00000000002, 1.31658394171, 52125.80966124419],
    [0.00000000002, 2.43230222606, 103.0927742186],
    [0.00000000002, 2.41277818747, 3328.13565628019],
    [0.00000000002, 3.38189136419, 25881.717593137],
    [0.00000000002, 0.33148559099, 54294.57014352679],
    [0.00000000002, 0.15981568, 77410.51304297059],
    [0.00000000002, 2.9058206975, 52643.7712735028],
    [0.00000000002, 0.45204563942, 71980.63357473118],
    [0.00000000001, 4.12045734648, 25440.89230825939],
    [0.00000000001, 1.18539094152, 12546.481939083],
    [0.00000000002, 4.49448672471, 146314.13330323418],
    [0.00000000001, 3.99060758894, 25867.49049913539],
    [0.00000000001, 0.11291308321, 105940.68546158058],
    [0.00000000001, 6.21239484932, 104138.31347085879],
    [0.00000000002, 1.60021595888, 51528.79544983359],
    [0.00000000002, 2.03829619352, 134991.4692049298],
    [0.00000000002, 0.76189495741, 84546.78527471398],
    [0.00000000001, 1.1929011981, 103925.01437542078],
    [0.00000000001, 0.26092608641, 155997.72788435058],
    [0.00000000001, 0.91369257474, 157636.79740153858],
    [0.00000000002, 2.4314147144, 143961.2671494624],
    [0.00000000001, 2.58462364639, 11610.5519583742],
    [0.00000000001, 5.08144757931, 32769.1279949738],
    [0.00000000001, 2.90527234589, 124156.43985787958],
    [0.00000000001, 6.04124419781, 16066.0658614748],
    [0.00000000001, 0.82693925421, 1692.1656695024],
    [0.00000000001, 1.7251078619, 26237.46633870879],
    [0.00000000001, 0.74557141998, 29428.515568274],
    [0.00000000001, 1.18363932898, 130012.91751699499],
    [0.00000000001, 5.537095115, 26720.68688088739],
    [0.00000000001, 2.2242123623, 25984.8103673556],
    [0.00000000001, 4.5154624397, 48835.19385644859],
    [0.00000000001, 3.61219119527, 131395.11544947958],
];

const Z2: &[Term] = &[
    [0.00004475377, 4.81703460547, 26087.9031415742],
    [0.00001109532, 0.0, 0.0],
    [0.00000180327, 1.19420644188, 52175.8062831484],
    [0.00000032581, 4.62632031743, 78263.70942472259],
    [0.00000017342, 1.72679813654, 104351.61256629678],
    [0.00000007781, 4.84181443647, 130439.51570787099],
    [0.00000002976, 1.62432394721, 156527.41884944518],
    [0.0000000104, 4.6784669015, 182615.3219910194],
    [0.0000000068, 1.83005840786, 27197.2816936676],
    [0.00000000344, 1.44603022303, 208703.2251325936],
    [0.0000000011, 4.49542230374, 234791.12827416777],
    [0.00000000124, 4.8665711928, 53285.1848352418],
    [0.00000000112, 5.14312161072, 24978.5245894808],
    [0.00000000079, 4.25092448424, 31749.2351907264],
    [0.00000000058, 2.00193276015, 51066.427731055],
    [0.00000000046, 5.63734699624, 27043.5028831828],
    [0.00000000054, 5.70534232394, 21535.9496445154],
    [0.00000000048, 3.15710696395, 51116.4243529592],
    [0.00000000034, 1.26182479499, 260879.03141574195],
    [0.00000000027, 5.76991833962, 529.6909650946],
    [0.00000000024, 5.07488580193, 77154.33087262919],
    [0.00000000024, 0.9539912361, 5661.3320491522],
    [0.00000000019, 1.78858873244, 28306.66024576099],
    [0.00000000021, 3.5789300702, 25558.2121764796],
    [0.00000000022, 0.13783545204, 25028.521211385],
    [0.00000000018, 5.5204910983, 47623.8527860896],
    [0.00000000022, 1.64692693544, 20426.571092422],
    [0.00000000014, 5.59601085083, 22645.32819660879],
    [0.00000000014, 3.31820162449, 1059.3819301892],
    [0.00000000018, 0.5497803081, 37410.5672398786],
    [0.00000000016, 1.54285068472, 79373.087976816],
    [0.00000000015, 4.49153081628, 26107.57290247399],
    [0.00000000014, 0.87791325175, 57837.1383323006],
    [0.00000000013, 5.1810692063, 1109.3785520934],
    [0.00000000011, 2.36351366554, 53131.406024757],
    [0.00000000012, 4.34261596283, 32858.61374281979],
    [0.00000000015, 2.28255722706, 50586.73338786459],
    [0.00000000012, 5.63353087898, 26068.2333806744],
    [0.00000000013, 2.08539778974, 25132.3033999656],
    [0.00000000013, 3.31771880069, 10213.285546211],
    [0.00000000013, 0.37928151736, 4551.9534970588],
    [0.00000000009, 5.32896907669, 23869.1460373874],
    [0.00000000009, 1.85195473467, 103242.2340142034],
    [0.0000000001, 2.69290690744, 26091.7844769322],
    [0.00000000012, 1.13570211007, 26084.0218062162],
    [0.0000000001, 4.31085447586, 286966.9345573162],
    [0.00000000008, 5.82534551009, 25874.6040461362],
    [0.00000000008, 6.1756159446, 51646.11531805379],
    [0.00000000008, 2.73528822352, 41962.5207369374],
    [0.00000000008, 0.86132391139, 39609.6545831656],
    [0.00000000007, 5.90586936446, 77204.32749453338],
    [0.00000000006, 2.23725426587, 26080.78959457339],
    [0.00000000007, 5.14284397401, 1589.0728952838],
    [0.00000000007, 3.13934336281, 43071.8992890308],
    [0.00000000005, 4.86318139233, 54394.56338733519],
    [0.00000000007, 2.45439783289, 213.299095438],
    [0.00000000006, 1.58442144371, 26095.016688575],
    [0.00000000006, 5.45060244038, 25973.46385288896],
    [0.00000000005, 4.79894457233, 46514.4742339962],
    [0.00000000005, 2.20020439243, 6283.0758499914],
    [0.00000000005, 5.382030646, 15874.6175953632],
    [0.00000000005, 2.7543206053, 19317.1925403286],
    [0.00000000004, 2.96762251508, 33326.5787331742],
    [0.00000000005, 3.58879974911, 63498.47038145279],
    [0.00000000004, 6.00635657777, 7.1135470008],
    [0.00000000004, 3.43811673157, 1066.49547719],
    [0.00000000004, 3.46360896326, 25661.3049506982],
    [0.00000000004, 4.83154673482, 51220.20654153979],
    [0.00000000005, 1.65155678587, 26202.34243025941],
    [0.00000000004, 4.05043524436, 51535.90899683439],
    [0.00000000004, 3.87269622429, 1052.2683831884],
    [0.00000000004, 1.1046221507, 58946.51688439399],
    [0.00000000004, 5.41502198784, 14765.2390432698],
    [0.00000000004, 2.03873056084, 26617.5941066688],
    [0.00000000003, 2.19389680754, 30639.856638633],
    [0.00000000003, 4.90884264121, 129330.13715577759],
    [0.00000000004, 6.22828785556, 36301.18868778519],
    [0.00000000004, 3.68258570333, 13521.7514415914],
    [0.00000000003, 5.62688231105, 48733.23133818299],
    [0.00000000004, 2.45849991842, 51749.20809227239],
    [0.00000000003, 3.06502787272, 16983.9961474566],
    [0.00000000003, 4.5774275434, 24498.8302462904],
    [0.00000000003, 1.4628623753, 3442.5749449654],
    [0.00000000003, 1.55999070785, 29530.4780865396],
    [0.00000000003, 5.1441720365, 76674.63652943878],
    [0.00000000003, 1.09829861469, 313054.83769889036],
    [0.00000000003, 2.10570480254, 49957.0491789616],
    [0.00000000002, 0.49635100411, 38519.945791972],
    [0.00000000003, 3.19744325207, 426.598190876],
    [0.00000000003, 2.27361066514, 72602.37737557039],
    [0.00000000002, 5.42166315666, 12566.1516999828],
    [0.00000000002, 4.11021645418, 2218.7571041868],
    [0.00000000002, 6.01977464255, 2118.7638603784],
    [0.00000000003, 3.82490235305, 9103.9069941176],
    [0.00000000002, 1.5599925847, 50057.04242277],
    [0.00000000002, 2.83741388675, 639.897286314],
    [0.00000000003, 5.50522133834, 23754.70674870219],
    [0.00000000002, 4.64349469451, 56727.7597802072],
    [0.00000000002, 1.95986167578, 73711.75592766379],
    [0.00000000002, 0.5567289456, 955.5997416086],
    [0.00000000002, 1.93244538678, 103292.23063610759],
    [0.00000000002, 6.05929958767, 25448.00585526019],
    [0.00000000002, 3.03995453086, 40853.142184844],
    [0.00000000001, 2.47665559131, 77734.01845962799],
    [0.00000000002, 6.25822253418, 52705.49724824299],
    [0.00000000002, 1.38627663309, 77308.10968311399],
    [0.00000000001, 1.59643416291, 27147.28507176339],
    [0.00000000002, 3.54992576302, 83925.0414738748],
    [0.00000000001, 5.8247306239, 45405.0956819028],
    [0.00000000001, 0.32361625099, 13655.8604911764],
    [0.00000000001, 4.59226455833, 55618.3812281138],
    [0.00000000001, 1.77801233677, 52156.1365222486],
    [0.00000000001, 3.5989923877, 53235.18821333759],
    [0.00000000001, 0.75186170269, 52195.47604404819],
    [0.00000000002, 4.21419422689, 105460.99111839019],
    [0.00000000001, 3.02724177299, 51962.5071877104],
    [0.00000000001, 5.54016425013, 98690.28051714458],
    [0.00000000001, 4.96163083687, 18849.2275499742],
    [0.00000000001, 5.1345319851, 52179.6876185064],
    [0.00000000001, 4.54050452164, 52168.69273614759],
    [0.00000000001, 3.67122666149, 52171.9249477904],
    [0.00000000001, 4.16002499033, 45892.73043315699],
    [0.00000000001, 3.11767834677, 78793.40038981718],
    [0.00000000001, 4.70607503583, 52290.24557183361],
    [0.00000000001, 1.72196789636, 155418.04029735178],
    [0.00000000001, 1.43678225289, 82815.66292178139],
    [0.00000000001, 3.6419540042, 65697.55772473979],
    [0.00000000001, 2.34232573897, 27676.976036858],
    [0.00000000001, 2.2251931515, 52061.36699446317],
    [0.00000000001, 4.06167314974, 339142.7408404646],
    [0.00000000001, 1.84893906586, 853.196381752],
    [0.00000000001, 5.42775732068, 26514.5013324502],
    [0.00000000001, 6.03028910593, 59414.4818747484],
    [0.00000000001, 5.09856883029, 76044.9523205358],
    [0.00000000001, 1.68523311659, 28421.0995344462],
    [0.00000000001, 5.32883383904, 79219.3091663312],
    [0.00000000001, 0.84570925458, 19804.8272915828],
    [0.00000000001, 1.0690665576, 124778.18365871879],
    [0.00000000001, 5.63868454693, 69159.80243060499],
    [0.00000000001, 5.38153004139, 26301.2022370122],
    [0.00000000001, 4.77073547131, 104881.30353139139],
    [0.00000000001, 4.74588142049, 129380.13377768178],
    [0.00000000001, 2.25545108286, 52602.4044740244],
    [0.00000000001, 3.98601687793, 11322.6640983044],
    [0.00000000001, 0.07845866028, 66941.04532641819],
    [0.00000000001, 2.88984683172, 38654.05484155699],
    [0.00000000001, 4.00503893845, 52182.9198301492],
    [0.00000000001, 3.49574656538, 52389.1053785864],
    [0.00000000001, 0.33429045009, 7238.6755916],
    [0.00000000001, 0.31985247795, 79323.09135491178],
    [0.00000000001, 6.10860920195, 51109.31080595839],
    [0.00000000001, 2.84676327671, 7994.5284420242],
    [0.00000000001, 3.11496551907, 25934.1243310894],
    [0.00000000001, 5.40172380413, 78477.00852016058],
    [0.00000000001, 0.41949488018, 6770.7106012456],
    [0.00000000001, 4.62233743377, 64741.95798313119],
    [0.00000000001, 4.2766236936, 12432.0426503978],
    [0.0, 0.88019140659, 110012.94461544899],
    [0.0, 1.18882526931, 28206.6670019526],
    [0.0, 5.6006739939, 51123.53789995999],
    [0.0, 0.66520680194, 419.4846438752],
    [0.0, 4.17948666644, 78267.59076008058],
    [0.0, 5.93970677792, 68050.42387851159],
    [0.0, 4.76480820754, 78244.0396638228],
    [0.00000000001, 0.17150693291, 433.7117378768],
    [0.0, 2.1046897466, 25619.9381512198],
    [0.00000000001, 5.16942669114, 77837.11123384659],
];

const Z3: &[Term] = &[
    [0.0000009925, 0.2944322959, 26087.9031415742],
    [0.00000092976, 0.0, 0.0],
    [0.0000000323, 4.02309993038, 52175.8062831484],
    [0.0000000064, 2.16717843388, 78263.70942472259],
    [0.00000000369, 6.09477192866, 104351.61256629678],
    [0.00000000224, 3.14630379889, 130439.51570787099],
    [0.00000000111, 0.00722359195, 156527.41884944518],
    [0.00000000048, 3.09594836549, 182615.3219910194],
    [0.00000000019, 6.16655603798, 208703.2251325936],
    [0.00000000021, 3.31046636942, 27197.2816936676],
    [0.00000000007, 2.94356012175, 234791.12827416777],
    [0.00000000007, 0.65628834083, 24978.5245894808],
    [0.00000000002, 5.99334261589, 260879.03141574195],
    [0.00000000002, 6.22873921629, 53285.1848352418],
    [0.00000000002, 5.78810325925, 31749.2351907264],
    [0.00000000001, 0.84479650691, 27043.5028831828],
    [0.00000000001, 1.53587211633, 1109.3785520934],
    [0.00000000001, 0.78761433232, 21535.9496445154],
    [0.00000000001, 4.53925772521, 51116.4243529592],
    [0.00000000001, 2.76184993272, 286966.9345573162],
    [0.00000000001, 4.91700706367, 25558.2121764796],
    [0.00000000001, 5.91899219772, 1059.3819301892],
    [0.00000000001, 3.91598529129, 25132.3033999656],
    [0.0, 0.95989869222, 1589.0728952838],
    [0.00000000001, 4.83279660629, 20426.571092422],
    [0.0, 3.46721290636, 77154.33087262919],
    [0.0, 1.74357991507, 37410.5672398786],
    [0.0, 5.52724719384, 5661.3320491522],
    [0.0, 2.42242414793, 46514.4742339962],
    [0.0, 3.95720083996, 4551.9534970588],
    [0.0, 0.55620001878, 47623.8527860896],
    [0.0, 2.51891896481, 57837.1383323006],
    [0.0, 4.06757949551, 51066.427731055],
    [0.0, 2.83782582761, 79373.087976816],
    [0.0, 3.41743579353, 50586.73338786459],
    [0.0, 0.3026750228, 103242.2340142034],
    [0.0, 2.80685029082, 28306.66024576099],
    [0.0, 5.7063333361, 26107.57290247399],
    [0.0, 0.34541196749, 22645.32819660879],
    [0.0, 0.46757777229, 26068.2333806744],
    [0.0, 5.3898156461, 32858.61374281979],
    [0.0, 2.34364280368, 26084.0218062162],
    [0.0, 3.81913361795, 26091.7844769322],
    [0.0, 5.09641110635, 10213.285546211],
    [0.0, 1.30349643922, 51646.11531805379],
    [0.0, 3.55639554083, 53131.406024757],
    [0.0, 1.15022684382, 25874.6040461362],
];

const Z4: &[Term] = &[
    [0.000000015, 1.82376153122, 26087.9031415742],
    [0.00000000592, PI, 0.0],
    [0.00000000056, 3.48599666355, 52175.8062831484],
    [0.00000000022, 0.17608711147, 78263.70942472259],
    [0.00000000009, 3.89825290813, 104351.61256629678],
    [0.00000000005, 1.27729295657, 130439.51570787099],
    [0.00000000003, 4.59766720323, 156527.41884944518],
    [0.00000000002, 1.46273885253, 182615.3219910194],
    [0.00000000001, 4.58832110028, 208703.2251325936],
    [0.0, 4.6490845035, 27197.2816936676],
    [0.0, 1.37450705839, 234791.12827416777],
    [0.0, 1.4261773306, 24978.5245894808],
];

pub static MERCURY: Vsop87Table = Vsop87Table {
    variables: Variables::Rectangular,
    reference: Reference::EclipticOfDate,
    series: [
        &[X0, X1, X2, X3, X4, X5],
        &[Y0, Y1, Y2, Y3, Y4, Y5],
        &[Z0, Z1, Z2, Z3, Z4],
    ],
};
