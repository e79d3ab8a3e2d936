//! VSOP87 elliptic elements of the Earth-Moon barycenter: a, λ, k, h, q, p on the ecliptic and equinox J2000.

use std::f64::consts::PI;

use super::super::{EllipticTable, Term};

const A0: &[Term] = &[
    [1.00000101778, 0.0, 0.0],
    [0.00001120473, 2.30855131827, 11506.7697697936],
    [0.00000760929, 1.42260407149, 3930.2096962196],
    [0.00000408978, 5.9872434538, 7860.4193924392],
    [0.00000249981, 1.12650483648, 11790.6290886588],
    [0.00000200599, 1.88809198469, 10977.078804699],
    [0.00000178074, 3.44544104119, 17260.1546546904],
    [0.00000159326, 2.54909632545, 15720.8387848784],
    [0.00000147658, 5.8278545603, 1577.3435424478],
    [0.00000109781, 1.17475009534, 5753.3848848968],
    [0.00000104096, 3.9716362354, 19651.048481098],
    [0.00000064214, 5.77161516572, 5223.6939198022],
    [0.00000069128, 5.39412565191, 23581.2581773176],
    [0.00000064299, 2.64917689204, 19804.8272915828],
    [0.00000043115, 1.92138618552, 398.1490034082],
    [0.00000045663, 2.64854394992, 775.522611324],
    [0.00000044901, 3.03539265392, 16730.4636895958],
    [0.00000050713, 1.75898494683, 12139.5535091068],
    [0.00000048175, 0.97242396633, 5507.5532386674],
    [0.00000046439, 0.53338030232, 27511.4678735372],
    [0.00000032094, 3.23874146685, 2544.3144198834],
    [0.0000003107, 5.32095485077, 2352.8661537718],
    [0.00000027295, 0.33514152794, 796.2980068164],
    [0.00000036238, 3.67006198454, 5884.9268465832],
    [0.00000024934, 1.46373448289, 10447.3878396044],
    [0.00000025488, 5.76567116758, 12036.4607348882],
    [0.00000031466, 1.95577176756, 31441.6775697568],
    [0.00000029571, 4.58145932979, 23013.5395395872],
    [0.00000028737, 2.39791037076, 9437.762934887],
    [0.00000019541, 1.82427646681, 17789.845619785],
    [0.00000016886, 5.07251607363, 5486.777843175],
    [0.00000021462, 3.37811566564, 35371.8872659764],
    [0.00000014742, 4.64268539886, 2146.1654164752],
    [0.00000019405, 3.82235525512, 13367.9726311066],
    [0.00000019349, 5.49949519739, 8827.3902698748],
    [0.00000011867, 5.277789608, 4694.0029547076],
    [0.00000014716, 4.80041287911, 39302.096962196],
    [0.00000010551, 0.62239597606, 8429.2412664666],
    [0.00000011878, 5.6999016736, 45892.73043315699],
    [0.0000001371, 5.24623087605, 17298.1823273262],
    [0.00000013962, 1.84143060639, 2942.4634232916],
    [0.00000011586, 1.95047790879, 3154.6870848956],
    [0.00000009549, 2.3413295944, 6283.0758499914],
    [0.00000009665, 4.18159591883, 22483.84857449259],
    [0.00000010618, 1.04585355564, 11769.8536931664],
    [0.00000009881, 2.50950385273, 11926.2544136688],
    [0.00000009885, 0.38657111879, 21228.3920235458],
    [0.00000010134, 6.22266428799, 43232.3066584156],
    [0.00000007331, 0.19432127737, 5088.6288397668],
    [0.00000006806, 2.45420492021, 11371.7046897582],
    [0.00000007174, 2.61626900521, 16200.7727245012],
    [0.00000006848, 4.11356593273, 4705.7323075436],
    [0.00000005582, 2.31599947414, 14143.4952424306],
    [0.00000007298, 5.21217678186, 1194.4470102246],
    [0.00000007199, 1.80986227463, 25158.6017197654],
    [0.00000006945, 6.04851976747, 1748.016413067],
    [0.0000000625, 2.17921892948, 11513.8833167944],
    [0.00000006371, 5.54374950427, 11499.6562227928],
    [0.00000007003, 1.36168542132, 47162.5163546352],
    [0.00000005459, 3.1138813764, 801.8209311238],
    [0.00000004784, 2.947974868, 23543.23050468179],
    [0.0000000482, 2.02798486498, 8031.0922630584],
    [0.00000005088, 3.4021562763, 7084.8967811152],
    [0.00000004402, 4.28483687721, 14314.1681130498],
    [0.00000005861, 2.87313056645, 14712.317116458],
    [0.00000005271, 3.2329859013, 29088.811415985],
    [0.00000005038, 5.71091844319, 28766.924424484],
    [0.00000004854, 2.7838477331, 51092.7260508548],
    [0.00000003351, 3.86079651484, 10973.55568635],
    [0.00000004565, 2.63221036484, 18209.33026366019],
    [0.00000003425, 1.17165682281, 1349.8674096588],
    [0.00000003869, 4.65598337205, 33019.0211122046],
    [0.00000002955, 5.64018349579, 8635.9420037632],
    [0.00000002822, 6.11630934006, 17256.6315363414],
    [0.00000003448, 2.40095009232, 13521.7514415914],
    [0.00000003116, 4.84921809855, 11015.1064773348],
    [0.00000002648, 1.03669171941, 9917.6968745098],
    [0.00000002618, 2.46694452996, 71980.63357473118],
    [0.000000025, 0.47864287592, 26.2983197998],
    [0.00000003373, 4.20596674626, 55022.9357470744],
    [0.00000003218, 4.6976037284, 17654.7805397496],
    [0.00000003112, 1.59994901211, 4690.4798363586],
    [0.00000002364, 5.69251459562, 13916.0191096416],
    [0.00000002844, 6.07888169833, 36949.2308084242],
    [0.00000002128, 3.80501093568, 1592.5960136328],
    [0.00000002707, 0.88699726166, 6069.7767545534],
    [0.00000002173, 4.97600634991, 5856.4776591154],
    [0.00000001836, 2.57869171502, 951.7184062506],
    [0.00000001939, 0.71802214147, 12566.1516999828],
    [0.00000001787, 2.69647898918, 10984.1923516998],
    [0.00000001798, 1.65917722594, 20199.094959633],
    [0.00000002126, 0.0094279316, 14945.3161735544],
    [0.00000001894, 3.76680288951, 21954.15760939799],
    [0.00000002349, 5.62804324226, 58953.145443294],
    [0.0000000227, 2.89525074416, 10873.9860304804],
    [0.00000002029, 5.32430976001, 28237.2334593894],
    [0.00000001658, 1.24033016893, 16858.4825329332],
    [0.00000001566, 4.84504239589, 4164.311989613],
    [0.00000002076, 3.43379089522, 7632.9432596502],
    [0.00000002092, 1.21851397259, 40879.4405046438],
    [0.00000001697, 5.14959099352, 10969.9652576982],
    [0.00000001584, 5.39361220848, 155.4203994342],
    [0.00000001742, 0.23517142492, 20597.2439630412],
    [0.00000001311, 3.00608025023, 4292.3308329504],
    [0.00000001509, 3.31526130935, 17267.26820169119],
    [0.00000001524, 1.4498820327, 18875.525869774],
    [0.00000001354, 1.46863025319, 3128.3887650958],
    [0.00000001519, 0.41059342728, 17253.04110768959],
    [0.00000001639, 0.76689274033, 62883.3551395136],
    [0.00000001174, 4.73857915266, 15110.4661198662],
    [0.00000001539, 2.64126389263, 44809.6502008634],
    [0.00000001152, 3.07049139555, 19800.9459562248],
    [0.0000000113, 2.918214539, 12168.0026965746],
    [0.00000001507, 5.26689114188, 10575.4066829418],
    [0.00000001229, 2.38909705566, 3738.761430108],
    [0.00000001129, 3.48579067652, 23141.5583829246],
    [0.00000001079, 4.0799368301, 29296.6153895786],
    [0.00000001216, 1.24356064263, 3.523118349],
    [0.00000001318, 3.27717613039, 11712.9553182308],
    [0.00000001397, 4.15021273919, 12352.8526045448],
    [0.00000001039, 1.05002301478, 955.5997416086],
    [0.00000001004, 0.28139509064, 18052.9295431578],
    [0.00000001188, 3.98591403129, 553.5694028424],
    [0.00000001227, 3.38522408919, 17996.0311682222],
    [0.00000000926, 2.19324306077, 15671.0817594066],
    [0.0000000112, 2.88795125802, 22805.7355659936],
    [0.0000000119, 0.76608335484, 4136.9104335162],
    [0.00000001131, 4.06395554792, 48739.859897083],
    [0.00000001119, 0.81613220825, 13517.8701062334],
    [0.00000000826, 3.20299874776, 6812.766815086],
    [0.0000000087, 4.83990325236, 7234.794256242],
    [0.00000001145, 2.18888662713, 66813.5648357332],
    [0.00000000923, 4.5542400109, 4732.0306273434],
    [0.00000000781, 2.10863560173, 20995.3929664494],
    [0.00000000791, 4.89977523517, 22743.4093795164],
    [0.00000000832, 1.36875387379, 25934.1243310894],
    [0.00000000945, 2.05457555131, 39609.6545831656],
    [0.00000000748, 4.72152416639, 11087.2851259184],
    [0.00000000724, 4.66612459081, 7238.6755916],
    [0.00000000796, 2.76895807554, 29864.334027309],
    [0.00000000758, 6.26760879574, 22003.9146348698],
    [0.00000000922, 2.05060260172, 23539.7073863328],
    [0.00000000699, 5.31065416028, 26084.0218062162],
    [0.00000000949, 0.97215553181, 155427.542936241],
    [0.00000000871, 0.5502771981, 34520.3093093808],
    [0.00000000931, 5.11055259535, 12416.5885028482],
    [0.00000000835, 4.32406527335, 26735.9452622132],
    [0.00000000785, 3.63146820072, 11403.676995575],
    [0.00000000651, 2.39753210739, 1990.745017041],
    [0.00000000705, 4.17629545587, 33794.5437235286],
    [0.00000000832, 2.64791745831, 16460.33352952499],
    [0.0000000062, 5.517817212, 98068.53671630539],
    [0.00000000647, 0.38998320586, 10177.2576795336],
    [0.00000000832, 5.48659617258, 52670.0695933026],
    [0.00000000724, 1.88230845724, 12132.439962106],
    [0.00000000802, 3.61084033096, 70743.77453195279],
    [0.00000000573, 3.93594787417, 23937.856389741],
    [0.0000000068, 4.77827920115, 12146.6670561076],
    [0.00000000552, 4.41260072787, 3894.1818295422],
    [0.00000000597, 5.5874874778, 37724.7534197482],
    [0.00000000596, 1.64528009257, 18422.62935909819],
    [0.00000000537, 0.44493207959, 25685.872802808],
    [0.00000000554, 2.91015399479, 7058.5984613154],
    [0.00000000629, 4.1701209044, 11609.8625440122],
    [0.00000000487, 3.61930163088, 16737.5772365966],
    [0.00000000627, 5.75855913974, 30666.1549584328],
    [0.00000000669, 5.74469097213, 11190.377900137],
    [0.00000000502, 4.93346253341, 18073.7049386502],
    [0.00000000528, 4.79999186639, 33326.5787331742],
    [0.00000000497, 2.22272049084, 13119.72110282519],
    [0.00000000566, 2.44005670647, 10344.2950653858],
    [0.00000000614, 4.47907169856, 19402.7969528166],
    [0.00000000506, 0.01103727434, 16723.350142595],
    [0.00000000611, 0.62600578175, 56600.2792895222],
    [0.00000000465, 5.64076684684, 4535.0594369244],
    [0.00000000603, 5.08342145622, 283.8593188652],
    [0.00000000489, 0.71781833909, 41654.9631159678],
    [0.00000000472, 4.91453216212, 27707.5424942948],
    [0.00000000488, 5.99353687932, 8662.240323563],
    [0.00000000426, 0.85020540801, 29026.48522950779],
    [0.00000000466, 5.71784090692, 5643.1785636774],
    [0.00000000562, 5.0327548158, 74673.9842281724],
    [0.00000000421, 4.80498596317, 32217.2001810808],
    [0.00000000404, 5.76277135803, 26880.3198130326],
    [0.00000000471, 5.83436317486, 11933.3679606696],
    [0.00000000416, 5.77223941814, 18319.5365848796],
    [0.00000000405, 3.38049798247, 28286.9904848612],
    [0.00000000382, 2.62413158544, 242.728603974],
    [0.00000000512, 4.03992216967, 16627.3709153772],
    [0.0000000039, 6.22909761761, 36147.4098773004],
    [0.00000000385, 4.05494770772, 16062.1845261168],
    [0.00000000473, 0.90851217803, 34596.3646546524],
    [0.00000000472, 3.85769364146, 26482.1708096244],
    [0.00000000358, 2.72816921054, 5216.5803728014],
    [0.00000000359, 6.24630645934, 6836.6452528338],
    [0.00000000359, 2.2722397929, 28628.3362260996],
    [0.00000000392, 2.13284105691, 45585.1728121874],
    [0.00000000418, 0.18048457783, 33990.6183442862],
    [0.00000000406, 2.53892594178, 10454.5013866052],
    [0.00000000448, 0.02640322539, 22345.2603761082],
    [0.00000000449, 2.04855924063, 60530.4889857418],
    [0.00000000346, 5.21991117763, 1551.045222648],
    [0.00000000337, 4.57068604607, 17782.7320727842],
    [0.00000000339, 1.36972495833, 40077.61957352],
    [0.00000000338, 1.57739716102, 24072.9214697764],
    [0.0000000031, 0.70743001345, 32370.9789915656],
    [0.00000000313, 3.67953529324, 10557.5941608238],
    [0.00000000424, 3.50536222185, 24279.10701821359],
    [0.00000000307, 2.07006429023, 24356.7807886416],
    [0.0000000034, 4.44924056539, 23020.65308658799],
    [0.00000000309, 4.35148252686, 10988.808157535],
    [0.00000000297, 5.886673327, 19004.6479494084],
    [0.00000000394, 0.17144530217, 78604.19392439199],
    [0.0000000029, 3.34692443335, 21424.4666443034],
    [0.00000000354, 0.55518442236, 9225.539273283],
    [0.00000000317, 1.14867001822, 12592.4500197826],
    [0.00000000358, 2.34050560847, 38526.574350872],
    [0.00000000278, 5.79506226949, 20.7753954924],
    [0.00000000309, 3.54889072561, 49515.382508407],
    [0.00000000282, 4.72690758954, 10440.2742926036],
    [0.00000000276, 1.3055520777, 29822.7832363242],
    [0.00000000284, 2.79330295516, 44007.8292697396],
    [0.0000000028, 2.27559790307, 16496.3613962024],
    [0.0000000027, 1.79641975345, 9779.1086761254],
    [0.00000000333, 1.5398473545, 23006.42599258639],
    [0.00000000257, 0.60759183869, 9388.0059094152],
    [0.00000000305, 4.46440380647, 5746.271337896],
    [0.00000000255, 2.6702585672, 31968.9486527994],
    [0.00000000255, 2.99016454792, 135.0650800354],
    [0.00000000329, 3.47107486214, 64460.6986819614],
    [0.00000000339, 1.75819229154, 72140.6286666874],
    [0.000000003, 1.04775911363, 5760.4984318976],
    [0.00000000324, 1.856263052, 25287.7237993998],
    [0.00000000234, 3.67874463897, 12029.3471878874],
    [0.00000000326, 4.81788946356, 59414.4818747484],
    [0.00000000233, 5.21263637694, 35050.00027447539],
    [0.00000000238, 4.09838629017, 31570.7996493912],
    [0.00000000232, 4.21669162244, 47938.0389659592],
    [0.00000000227, 1.43471135923, 21947.1113727],
    [0.00000000225, 5.65057164537, 2379.1644735716],
    [0.00000000241, 4.96566599477, 53445.5922046266],
    [0.00000000213, 3.62930942387, 12721.572099417],
    [0.00000000271, 3.77152352331, 42456.7840470916],
    [0.00000000286, 5.44955714408, 12489.8856287072],
    [0.00000000226, 5.57869049041, 5230.807466803],
    [0.00000000277, 1.59328336474, 82534.40362061159],
    [0.00000000224, 2.58602268249, 16522.6597160022],
    [0.00000000233, 5.81942843714, 3496.032826134],
    [0.0000000023, 5.65006290464, 29424.634232916],
    [0.00000000183, 3.13034302166, 32765.2466596158],
    [0.00000000242, 4.89355516509, 68390.90837818099],
    [0.0000000018, 4.42743120519, 3634.6210245184],
    [0.00000000186, 5.63992343015, 51868.2486621788],
    [0.00000000205, 2.6240033515, 11919.140866668],
    [0.00000000172, 4.23216045042, 4933.2084403326],
    [0.00000000231, 3.68543269363, 28230.18722269139],
    [0.00000000214, 1.58672107712, 5120.6011455836],
    [0.00000000171, 5.87119785423, 16840.67001081519],
    [0.0000000017, 5.46179205064, 15664.03552270859],
    [0.0000000018, 5.80309882906, 14919.0178537546],
    [0.00000000177, 2.01397390869, 10770.8932562618],
    [0.00000000172, 3.26542617801, 24889.5747959916],
    [0.00000000182, 1.16138700492, 53131.406024757],
    [0.00000000163, 1.11327655555, 27043.5028831828],
    [0.00000000186, 0.09978330768, 57375.8019008462],
    [0.00000000206, 0.98982600758, 2388.8940204492],
    [0.00000000206, 5.20170448101, 46386.9937433112],
    [0.00000000175, 5.4004049709, 10660.6869350424],
    [0.00000000152, 2.28545688357, 124156.43985787958],
    [0.00000000155, 5.9232018046, 34513.2630726828],
    [0.00000000149, 4.48678139349, 34911.412076091],
    [0.00000000165, 4.02244941731, 20452.8694122218],
    [0.00000000147, 0.77983700652, 55798.4583583984],
    [0.00000000173, 1.88070201151, 11823.1616394502],
    [0.0000000016, 3.42240859973, 11080.1715789176],
    [0.00000000142, 0.13926118, 4590.910180489],
    [0.00000000195, 3.015084331, 86464.6133168312],
    [0.00000000191, 5.03547483519, 263.0839233728],
    [0.00000000159, 3.61411435271, 16097.6799502826],
    [0.00000000135, 1.01068313129, 18606.4989460002],
    [0.00000000177, 0.03281672032, 72321.1180744006],
    [0.00000000136, 1.19363505375, 7477.522860216],
    [0.0000000016, 5.30912637264, 17363.24742890899],
    [0.00000000127, 4.62064671724, 22490.9621214934],
    [0.00000000142, 1.51747515999, 61306.0115970658],
    [0.00000000132, 1.02787562069, 11293.4706743556],
    [0.00000000129, 5.09561846944, 27832.0382192832],
    [0.00000000136, 1.15467304019, 22476.73502749179],
    [0.00000000152, 1.66555103856, 40273.6941942776],
    [0.00000000163, 5.51386682406, 31172.650645983],
    [0.00000000143, 2.8155742298, 7079.3738568078],
    [0.00000000151, 2.66777898334, 12341.8069042809],
    [0.00000000156, 0.3479755945, 50317.2034395308],
    [0.00000000119, 4.95362151468, 35707.7100829074],
    [0.00000000127, 0.38033143029, 11720.0688652316],
    [0.00000000147, 1.36978033678, 6438.4962494256],
    [0.00000000111, 1.69766317565, 17796.9591667858],
    [0.00000000115, 2.2028208574, 59728.668054618],
    [0.00000000147, 4.55943969313, 17157.0618804718],
    [0.00000000114, 2.77246173516, 9623.6882766912],
    [0.00000000152, 0.59535934471, 16943.7627850338],
    [0.00000000146, 4.25602165767, 24065.80792277559],
    [0.00000000107, 2.84235118188, 21548.9623692918],
    [0.00000000105, 1.76778731809, 15141.390794312],
    [0.00000000124, 5.45800270848, 24383.0791084414],
    [0.00000000116, 3.55326897177, 16207.886271502],
    [0.00000000113, 6.0597679333, 33460.92737919159],
    [0.000000001, 2.25671243419, 4686.8894077068],
    [0.00000000137, 4.43684904281, 90394.82301305079],
    [0.00000000101, 5.87747401128, 16193.65917750039],
    [0.00000000106, 2.01237263408, 9814.6041002912],
    [0.00000000099, 1.46327331849, 37455.7264959744],
    [0.00000000104, 2.64063074208, 29826.3063546732],
    [0.0000000013, 1.45523307816, 76251.32777062019],
    [0.00000000108, 2.93545942821, 65236.2212932854],
    [0.000000001, 0.94331915866, 3097.88382272579],
    [0.000000001, 3.42360983666, 11300.5842213564],
    [0.00000000096, 0.38459238851, 5481.2549188676],
    [0.00000000095, 0.64208216374, 30774.5016425748],
    [0.00000000111, 0.34451015315, 245.8316462294],
    [0.00000000118, 1.77680146918, 54247.4131357504],
    [0.00000000111, 3.20303452743, 9380.9596727172],
    [0.00000000103, 1.12845570561, 32367.0976562076],
    [0.00000000089, 3.62570223058, 63658.8777508376],
    [0.00000000086, 0.01524183472, 37853.8754993826],
    [0.00000000084, 4.67360536624, 24491.4257925834],
    [0.00000000113, 1.05832022191, 34115.1140692746],
    [0.00000000084, 4.4978191131, 27177.8515292002],
    [0.00000000112, 5.18468649875, 22380.755800274],
    [0.00000000094, 0.6095531547, 28313.288804661],
    [0.00000000079, 4.9117738257, 16310.9790457206],
    [0.00000000083, 0.81122622746, 6309.3741697912],
    [0.0000000009, 1.0152838753, 149144.46708624958],
    [0.00000000094, 5.65129820769, 18216.443810661],
    [0.00000000094, 2.75482175292, 18202.21671665939],
    [0.00000000075, 0.49178679142, 38650.173506199],
    [0.00000000095, 6.18083453184, 4701.1165017084],
    [0.00000000078, 2.28841005426, 266.6070417218],
    [0.00000000081, 4.35366205283, 69166.430989505],
    [0.00000000097, 1.67532457059, 2107.0345075424],
    [0.00000000079, 2.51558340049, 24492.40611365159],
    [0.00000000095, 2.87761999969, 80181.53746683979],
    [0.00000000096, 5.85857837289, 94325.0327092704],
    [0.00000000089, 5.0359805773, 12323.4230960088],
    [0.0000000007, 0.01186520502, 12242.6462833254],
    [0.00000000096, 0.59736360597, 11146.2856028662],
    [0.00000000085, 1.31648403745, 39744.003229183],
    [0.00000000091, 1.20673076532, 79219.3091663312],
    [0.00000000071, 5.64452746468, 12043.574281889],
    [0.0000000007, 2.4711615012, 33716.9650658664],
    [0.00000000089, 3.20507481291, 58177.62283197],
    [0.00000000068, 5.04849248017, 67589.08744705719],
    [0.00000000065, 0.22125564878, 27433.88921587499],
    [0.00000000087, 4.97290141387, 65697.55772473979],
    [0.00000000079, 5.93573544132, 17892.93839400359],
    [0.00000000062, 3.77026483128, 46848.3301747656],
    [0.00000000067, 5.86513124098, 2787.0430238574],
    [0.00000000068, 2.04635693096, 11520.9968637952],
    [0.00000000086, 5.74606933575, 3646.3503773544],
    [0.00000000063, 3.28466046403, 40398.189919266],
    [0.00000000072, 2.04352934486, 32243.4985008806],
    [0.00000000082, 0.57578311452, 18849.2275499742],
    [0.00000000071, 5.58838864431, 28774.0379714848],
    [0.00000000059, 6.06651158607, 7875.6718636242],
    [0.00000000065, 3.81851116365, 72936.23331633979],
    [0.00000000064, 0.15582704996, 5429.8794682394],
    [0.00000000067, 1.5805896627, 85502.38501632259],
    [0.00000000061, 3.87224514677, 58458.88213313979],
    [0.00000000078, 2.88508658906, 37057.5774925662],
    [0.00000000072, 0.58541955024, 15265.8865193004],
    [0.0000000006, 2.5205660576, 9924.8104215106],
    [0.0000000006, 2.77666202426, 6040.3472460174],
    [0.00000000056, 2.44640026637, 10241.2022911672],
    [0.00000000057, 3.60243808995, 5333.9002410216],
    [0.00000000059, 2.69870081997, 5650.2921106782],
    [0.00000000071, 2.69185331924, 28759.81087748319],
    [0.00000000077, 4.62659603715, 12455.9453787634],
    [0.00000000056, 6.23716353415, 23536.11695768099],
    [0.00000000058, 2.14924433772, 38.0276726358],
    [0.00000000053, 2.0992109455, 11616.976091013],
    [0.0000000006, 5.82565570521, 24336.0053931492],
    [0.00000000061, 5.77203028836, 73096.64068572459],
    [0.00000000065, 0.37479205097, 18003.144715223],
    [0.00000000059, 1.36781320477, 27278.4688164408],
    [0.00000000053, 1.83497644123, 9411.4646150872],
    [0.00000000069, 4.2999790187, 84111.7471630594],
    [0.00000000052, 0.18801406621, 71519.2971432768],
    [0.00000000068, 4.63286155099, 62107.8325281896],
    [0.0000000005, 2.05165875683, 30376.3526391666],
    [0.00000000049, 3.6925185978, 7342.4577801806],
    [0.00000000049, 0.06112970702, 40803.3851593722],
    [0.00000000068, 0.99708825208, 98255.24240548999],
    [0.00000000068, 1.98185594065, 4804.209275927],
    [0.00000000062, 2.82360753852, 5331.3574437408],
    [0.0000000005, 4.29963592037, 36659.428489158],
    [0.00000000054, 3.99462866336, 21393.5419698576],
    [0.00000000053, 3.19237815054, 30220.9322397324],
    [0.00000000048, 1.81973492416, 40796.33892267419],
    [0.00000000056, 3.4768013277, 36173.7081971002],
    [0.00000000059, 2.41771240939, 18208.349942592],
    [0.00000000047, 2.31065372551, 41592.6369294906],
    [0.00000000055, 2.72934307495, 10027.9031957292],
    [0.00000000054, 5.48562548016, 11510.7019230567],
    [0.00000000054, 2.27307187969, 11502.8376165305],
    [0.00000000049, 2.25344599729, 10239.5838660108],
    [0.00000000057, 4.73126970957, 16833.55646381439],
    [0.00000000046, 3.02629260887, 16524.2781411586],
    [0.00000000056, 2.76534080009, 10881.0995774812],
    [0.00000000054, 1.21638654813, 640.8776073822],
    [0.00000000045, 3.70853572675, 20760.4270331914],
    [0.00000000061, 2.35555588279, 83286.91426955358],
    [0.00000000043, 5.86788302191, 4061.2192153944],
    [0.00000000043, 2.35059946745, 2699.7348193176],
    [0.00000000045, 4.60982550269, 8982.810669309],
    [0.00000000043, 4.20387669422, 17679.63929856559],
    [0.00000000058, 5.95654890451, 10866.8724834796],
    [0.0000000005, 4.7370841471, 21851.0648351794],
    [0.00000000044, 2.37809808686, 22779.4372461938],
    [0.00000000047, 1.2632175201, 5326.7866940208],
    [0.00000000041, 2.82408257403, 23550.34405168259],
    [0.00000000042, 2.43298930814, 10138.1095169486],
    [0.00000000045, 5.01708002462, 33163.395663024],
    [0.00000000046, 0.90733596845, 77026.8503819442],
    [0.00000000042, 2.13419242202, 18451.07854656599],
    [0.00000000053, 3.10101395687, 6037.244203762],
    [0.0000000004, 1.61064586635, 75449.50683949639],
    [0.00000000038, 2.92417414283, 20894.77567920879],
    [0.00000000053, 4.71088333867, 40000.04091585779],
    [0.00000000038, 3.88161634979, 33318.8160624582],
    [0.00000000039, 5.10374612711, 43340.6533425576],
    [0.00000000051, 6.06021576129, 66038.04222440919],
    [0.00000000048, 4.24967019111, 21150.8133658836],
    [0.00000000046, 1.94283147396, 6133.5126528568],
    [0.00000000037, 4.29919909372, 9910.583327509],
    [0.00000000051, 5.72230963866, 88041.956859279],
    [0.00000000038, 5.33626563318, 150244.3429994538],
    [0.0000000004, 2.80540842671, 35309.5610794992],
    [0.00000000048, 3.15413327757, 17576.546524347],
];

const A1: &[Term] = &[
    [0.00000013321, 1.4011902836, 1577.3435424478],
    [0.00000010803, 2.77156683086, 10977.078804699],
    [0.00000004663, 1.28775121854, 5223.6939198022],
    [0.00000004372, 5.11611955859, 796.2980068164],
    [0.00000004319, 2.82828181365, 5507.5532386674],
    [0.00000003409, 0.29817215068, 398.1490034082],
    [0.00000003471, 5.09836810459, 775.522611324],
    [0.00000004151, 3.38682035888, 2352.8661537718],
    [0.00000002529, 4.74628771137, 2544.3144198834],
    [0.00000002701, 2.34681507849, 10447.3878396044],
    [0.00000002398, 3.92375798503, 16730.4636895958],
    [0.00000002566, 4.25319142546, 9437.762934887],
    [0.00000002349, 6.1462426613, 2146.1654164752],
    [0.00000001896, 0.94991529218, 11499.6562227928],
    [0.00000001832, 0.48955194116, 11513.8833167944],
    [0.00000001723, 5.67835709759, 13367.9726311066],
    [0.00000001487, 0.14474998735, 17789.845619785],
    [0.00000001328, 0.29845211668, 5486.777843175],
    [0.00000001769, 3.71327519314, 1194.4470102246],
    [0.00000001271, 0.45438942341, 4694.0029547076],
    [0.00000001673, 1.2661023339, 1748.016413067],
    [0.00000001228, 4.9408934307, 12036.4607348882],
    [0.00000001156, 4.63669157134, 11926.2544136688],
    [0.00000001163, 1.70011307211, 5088.6288397668],
    [0.00000001215, 0.81881117715, 17298.1823273262],
    [0.00000001106, 2.67044737146, 1349.8674096588],
    [0.00000000907, 0.60469231927, 155.4203994342],
    [0.00000000827, 2.13238401455, 8429.2412664666],
    [0.00000000876, 2.24137860794, 21228.3920235458],
    [0.00000000762, 3.53400234878, 8031.0922630584],
    [0.00000000744, 4.07537900211, 951.7184062506],
    [0.00000000773, 3.50034260318, 16200.7727245012],
    [0.0000000069, 2.30865824524, 1592.5960136328],
    [0.0000000081, 5.49480067414, 3154.6870848956],
    [0.00000000611, 6.26633720649, 4705.7323075436],
    [0.00000000637, 3.66458448135, 25158.6017197654],
    [0.00000000745, 3.10208206813, 4690.4798363586],
    [0.00000000532, 3.96709817375, 11371.7046897582],
    [0.00000000529, 5.36832095224, 10973.55568635],
    [0.00000000556, 0.46596504154, 10969.9652576982],
    [0.00000000511, 5.07683308345, 22483.84857449259],
    [0.00000000457, 0.91856132828, 10984.1923516998],
    [0.00000000581, 5.48118240013, 553.5694028424],
    [0.00000000467, 5.08658384703, 29088.811415985],
    [0.00000000482, 6.22424218435, 6283.0758499914],
    [0.00000000421, 4.50629257826, 4292.3308329504],
    [0.00000000443, 1.62375899108, 17267.26820169119],
    [0.00000000445, 2.11303689347, 17253.04110768959],
    [0.00000000376, 5.49249784156, 14143.4952424306],
    [0.00000000365, 1.2789052744, 23543.23050468179],
    [0.00000000372, 0.91878153069, 13916.0191096416],
    [0.00000000495, 4.93733767615, 7632.9432596502],
    [0.00000000432, 1.92033808238, 9917.6968745098],
    [0.00000000341, 1.12322949012, 8635.9420037632],
    [0.00000000343, 5.80139903592, 14314.1681130498],
    [0.00000000311, 5.40055546162, 11712.9553182308],
    [0.00000000343, 0.22519919151, 33019.0211122046],
    [0.00000000379, 5.58005575361, 11506.7697697936],
    [0.00000000328, 4.16113994086, 45892.73043315699],
    [0.00000000278, 0.05837137034, 7234.794256242],
    [0.0000000035, 0.40214266823, 7084.8967811152],
    [0.00000000352, 0.32528686355, 801.8209311238],
    [0.00000000359, 0.48862200398, 10575.4066829418],
    [0.00000000266, 0.90290252306, 1990.745017041],
    [0.0000000026, 2.75180489029, 16858.4825329332],
    [0.00000000262, 2.38256670043, 12566.1516999828],
    [0.0000000025, 1.13073865165, 242.728603974],
    [0.00000000331, 4.22213342978, 26.2983197998],
    [0.00000000237, 6.12867918213, 4164.311989613],
    [0.00000000253, 1.64683273322, 36949.2308084242],
    [0.00000000222, 5.91123637897, 3894.1818295422],
    [0.0000000022, 1.35207156082, 17256.6315363414],
    [0.00000000291, 5.55340791936, 4136.9104335162],
    [0.00000000206, 1.89294135241, 10177.2576795336],
    [0.00000000266, 2.32243020282, 13517.8701062334],
    [0.0000000022, 1.62703053858, 11015.1064773348],
    [0.00000000215, 3.56654609549, 12132.439962106],
    [0.00000000203, 4.65291724164, 21954.15760939799],
    [0.00000000202, 0.82079348432, 3738.761430108],
    [0.00000000181, 4.58421381583, 19800.9459562248],
    [0.00000000209, 0.5023526875, 17260.1546546904],
    [0.00000000197, 3.08173967254, 12146.6670561076],
    [0.00000000186, 3.06832100964, 40879.4405046438],
    [0.00000000162, 2.01806064772, 12352.8526045448],
    [0.00000000158, 3.72691494765, 13119.72110282519],
    [0.00000000165, 1.61533717382, 16723.350142595],
    [0.00000000153, 4.14750752528, 4535.0594369244],
    [0.00000000158, 2.89435630606, 14945.3161735544],
    [0.00000000145, 5.51362285015, 17996.0311682222],
    [0.00000000197, 4.15564419372, 16460.33352952499],
    [0.00000000144, 1.46322412331, 6836.6452528338],
    [0.00000000145, 0.93101359035, 71980.63357473118],
    [0.00000000139, 3.18542448433, 20199.094959633],
    [0.00000000131, 4.44066156762, 5216.5803728014],
    [0.00000000128, 1.87230980707, 16737.5772365966],
    [0.00000000137, 4.48968058595, 44809.6502008634],
    [0.0000000015, 3.07676175487, 15671.0817594066],
    [0.00000000124, 0.13280218804, 22743.4093795164],
    [0.00000000122, 5.56035157921, 16062.1845261168],
    [0.0000000012, 4.19720379139, 18875.525869774],
    [0.00000000149, 6.22410869397, 3.523118349],
    [0.00000000108, 1.67226092259, 6812.766815086],
    [0.00000000122, 4.30799905122, 13521.7514415914],
    [0.00000000108, 3.29781189564, 9779.1086761254],
    [0.00000000145, 5.98829637769, 19402.7969528166],
    [0.00000000104, 0.64732132462, 5856.4776591154],
    [0.00000000106, 6.22888813933, 28237.2334593894],
    [0.00000000141, 5.73105842123, 25934.1243310894],
    [0.00000000134, 0.86853801812, 29864.334027309],
    [0.00000000132, 4.31664649369, 22003.9146348698],
    [0.00000000099, 6.25421931095, 10440.2742926036],
    [0.00000000093, 5.52708086641, 22805.7355659936],
    [0.00000000094, 1.11010113212, 19004.6479494084],
    [0.00000000101, 5.91092361901, 48739.859897083],
    [0.00000000098, 2.76137787987, 23020.65308658799],
    [0.00000000088, 3.14065477386, 15110.4661198662],
    [0.00000000087, 5.01817748364, 23141.5583829246],
    [0.00000000119, 2.29214514727, 33794.5437235286],
    [0.00000000085, 0.23999941147, 17782.7320727842],
    [0.00000000099, 3.23630174638, 23006.42599258639],
    [0.00000000085, 1.31319176119, 12168.0026965746],
    [0.00000000093, 6.14736108403, 5746.271337896],
    [0.00000000083, 2.41302357138, 29296.6153895786],
    [0.00000000085, 5.13187952627, 12721.572099417],
    [0.00000000113, 1.03355057654, 3496.032826134],
    [0.00000000082, 3.03348088049, 11087.2851259184],
    [0.00000000081, 1.51472182963, 5643.1785636774],
    [0.00000000084, 1.96389657081, 25685.872802808],
    [0.00000000106, 1.53721256114, 22345.2603761082],
    [0.00000000087, 4.04450740409, 3128.3887650958],
    [0.00000000075, 4.96723822988, 18052.9295431578],
    [0.00000000085, 5.64190091643, 5760.4984318976],
    [0.00000000081, 0.80011469638, 10454.5013866052],
    [0.00000000073, 0.59369434559, 26735.9452622132],
    [0.00000000101, 5.7797487456, 2388.8940204492],
    [0.00000000101, 3.71735809436, 37724.7534197482],
    [0.00000000098, 4.02820738804, 11933.3679606696],
    [0.00000000076, 4.40919648621, 11919.140866668],
    [0.00000000072, 2.94255489402, 21947.1113727],
    [0.00000000094, 2.92028139092, 18073.7049386502],
    [0.00000000071, 2.45942937091, 3930.2096962196],
    [0.00000000071, 2.74064322076, 4933.2084403326],
    [0.00000000072, 0.05543474657, 32217.2001810808],
    [0.00000000074, 1.04887260419, 52670.0695933026],
    [0.00000000068, 0.68228885532, 15664.03552270859],
    [0.00000000069, 4.91725875241, 28286.9904848612],
    [0.00000000064, 2.62953820695, 11403.676995575],
    [0.00000000066, 1.47770021531, 36147.4098773004],
    [0.00000000067, 2.42776049035, 955.5997416086],
    [0.00000000084, 5.1435286128, 41654.9631159678],
    [0.00000000058, 1.95813866586, 30666.1549584328],
    [0.00000000058, 0.50907901285, 20995.3929664494],
    [0.00000000076, 3.36875640949, 25287.7237993998],
    [0.00000000067, 1.63936491875, 23013.5395395872],
    [0.00000000057, 2.43948635872, 3097.88382272579],
    [0.00000000056, 3.79424235654, 28628.3362260996],
    [0.00000000057, 2.90051363033, 40077.61957352],
    [0.00000000054, 4.7745335343, 24889.5747959916],
    [0.00000000054, 0.56700660169, 26084.0218062162],
    [0.00000000054, 2.51544048669, 18606.4989460002],
    [0.00000000071, 2.8685715874, 6438.4962494256],
    [0.0000000005, 3.98215529326, 18319.5365848796],
    [0.00000000049, 5.32784370535, 12029.3471878874],
    [0.00000000068, 0.28711200205, 45585.1728121874],
    [0.00000000055, 2.4699085711, 56600.2792895222],
    [0.00000000062, 1.58997020291, 4732.0306273434],
    [0.00000000048, 3.98463182623, 98068.53671630539],
    [0.00000000046, 3.33345519137, 34596.3646546524],
    [0.0000000005, 5.80361829113, 27707.5424942948],
    [0.00000000045, 5.1531726194, 11609.8625440122],
    [0.00000000047, 4.32368037432, 44007.8292697396],
    [0.00000000045, 5.98867323197, 7477.522860216],
    [0.00000000045, 3.53231342768, 24356.7807886416],
    [0.00000000042, 2.3322883852, 23937.856389741],
    [0.00000000044, 3.80376818886, 16496.3613962024],
    [0.00000000043, 4.34816887089, 21548.9623692918],
    [0.00000000049, 2.90112369816, 11790.6290886588],
    [0.00000000044, 1.55343591583, 5753.3848848968],
    [0.00000000055, 3.7611001283, 5230.807466803],
    [0.00000000056, 1.49203404782, 9388.0059094152],
    [0.00000000044, 2.768783563, 22476.73502749179],
    [0.00000000048, 5.99382673688, 24072.9214697764],
    [0.00000000051, 1.65706069224, 12139.5535091068],
    [0.00000000054, 5.19972255715, 28230.18722269139],
    [0.00000000041, 0.32284711487, 27832.0382192832],
    [0.00000000054, 1.71426835218, 49515.382508407],
    [0.00000000054, 4.70310976081, 9380.9596727172],
    [0.00000000039, 6.28251960123, 17796.9591667858],
    [0.00000000038, 3.90371372307, 4686.8894077068],
    [0.00000000047, 4.23111463898, 21424.4666443034],
    [0.00000000038, 4.37299248458, 2787.0430238574],
    [0.00000000036, 4.71696972459, 38526.574350872],
    [0.0000000004, 3.89085221162, 60530.4889857418],
    [0.00000000038, 5.74708346152, 47938.0389659592],
    [0.00000000037, 5.62374168581, 31570.7996493912],
    [0.00000000036, 5.61520456066, 3634.6210245184],
    [0.00000000045, 4.21093748275, 15720.8387848784],
    [0.00000000037, 5.27592820883, 7058.5984613154],
    [0.00000000035, 1.16102055851, 16193.65917750039],
    [0.00000000034, 4.27431748944, 6040.3472460174],
    [0.00000000033, 6.18048361571, 24491.4257925834],
    [0.00000000035, 5.81832016473, 7238.6755916],
    [0.00000000034, 2.88235904903, 22490.9621214934],
    [0.00000000032, 2.39807726413, 29026.48522950779],
    [0.00000000043, 0.25402413548, 12323.4230960088],
    [0.00000000043, 3.14167359769, 53445.5922046266],
    [0.00000000037, 1.27633008728, 7079.3738568078],
    [0.00000000039, 1.49839575379, 1551.045222648],
    [0.0000000004, 6.00703463331, 640.8776073822],
    [0.00000000034, 2.86999298278, 8662.240323563],
    [0.0000000003, 2.15385727799, 30774.5016425748],
    [0.0000000003, 4.15341124674, 26880.3198130326],
    [0.0000000004, 5.54978736973, 19651.048481098],
    [0.0000000003, 0.88746229737, 51868.2486621788],
    [0.00000000033, 1.53643099564, 7860.4193924392],
    [0.00000000028, 6.10676683197, 42456.7840470916],
    [0.00000000038, 0.7468920454, 31172.650645983],
    [0.00000000028, 3.84576994398, 2699.7348193176],
    [0.00000000028, 1.76105331553, 16207.886271502],
    [0.0000000003, 5.31170419304, 64460.6986819614],
    [0.00000000035, 0.6250134258, 23581.2581773176],
    [0.00000000035, 2.0877112169, 15265.8865193004],
    [0.00000000026, 1.72920156413, 27433.88921587499],
    [0.00000000025, 3.2950201814, 10344.2950653858],
    [0.00000000033, 4.56924302052, 57375.8019008462],
    [0.00000000025, 6.10876323652, 8982.810669309],
    [0.00000000028, 3.96102762836, 18216.443810661],
    [0.00000000028, 4.44509492101, 18202.21671665939],
    [0.00000000025, 4.5797616354, 7875.6718636242],
    [0.00000000027, 1.7505352388, 11300.5842213564],
    [0.00000000029, 1.9975109891, 27511.4678735372],
    [0.00000000024, 1.16907540406, 34513.2630726828],
    [0.00000000031, 1.33338974453, 5331.3574437408],
    [0.00000000022, 5.98733544884, 18422.62935909819],
    [0.00000000023, 3.99157536382, 12043.574281889],
    [0.00000000024, 2.31113147788, 55798.4583583984],
    [0.00000000022, 1.21827019741, 46386.9937433112],
    [0.00000000024, 4.17432665111, 12592.4500197826],
    [0.00000000022, 0.23487212283, 10988.808157535],
    [0.00000000022, 3.98436128126, 33716.9650658664],
    [0.00000000022, 1.0968622463, 33990.6183442862],
    [0.00000000023, 1.29812666114, 9623.6882766912],
    [0.00000000028, 3.92101163058, 18208.349942592],
    [0.0000000002, 4.71509352723, 11080.1715789176],
    [0.00000000021, 0.38416933481, 10770.8932562618],
    [0.00000000025, 3.38055724826, 31441.6775697568],
    [0.0000000002, 1.52296306729, 135.0650800354],
    [0.00000000021, 1.65966009661, 11925.2740926006],
    [0.00000000022, 5.49295161352, 9225.539273283],
    [0.0000000002, 5.9721181517, 29822.7832363242],
    [0.00000000022, 0.44928962326, 68390.90837818099],
    [0.00000000027, 2.57658452702, 34115.1140692746],
    [0.0000000002, 3.56069084484, 30376.3526391666],
    [0.00000000026, 5.99691013177, 61306.0115970658],
    [0.00000000019, 4.22789549534, 31968.9486527994],
    [0.00000000021, 3.89809321202, 28774.0379714848],
    [0.00000000019, 4.18378730347, 16840.67001081519],
    [0.00000000019, 4.22274694347, 4701.1165017084],
];

const A2: &[Term] = &[
    [0.00000000615, 3.0967463801, 1577.3435424478],
    [0.0000000065, 5.56221532891, 775.522611324],
    [0.00000000445, 4.03738261123, 10977.078804699],
    [0.00000000341, 3.5737719323, 796.2980068164],
    [0.00000000255, 2.1146844333, 155.4203994342],
    [0.00000000198, 4.52307426431, 5507.5532386674],
    [0.00000000187, 2.79978122416, 5223.6939198022],
    [0.00000000203, 1.59875482708, 2352.8661537718],
    [0.00000000184, 1.40453002096, 2146.1654164752],
    [0.00000000174, 4.19279657495, 1349.8674096588],
    [0.00000000157, 3.5086720268, 10447.3878396044],
    [0.00000000207, 2.18333435389, 1194.4470102246],
    [0.00000000197, 2.79579642989, 1748.016413067],
    [0.00000000147, 5.59281536079, 951.7184062506],
    [0.00000000137, 5.01325256026, 398.1490034082],
    [0.00000000164, 5.3494968188, 3154.6870848956],
    [0.00000000117, 5.94726392179, 9437.762934887],
    [0.00000000109, 0.78634885411, 1592.5960136328],
    [0.00000000139, 0.71151127693, 553.5694028424],
    [0.00000000101, 5.17557093226, 16730.4636895958],
    [0.00000000102, 0.03145355642, 2544.3144198834],
    [0.00000000091, 3.24124585927, 5088.6288397668],
    [0.0000000008, 5.90599821563, 242.728603974],
    [0.00000000098, 0.77880207012, 4705.7323075436],
    [0.00000000079, 1.08728604344, 13367.9726311066],
    [0.0000000008, 1.81470773422, 4694.0029547076],
    [0.00000000088, 4.63233573928, 4690.4798363586],
    [0.00000000091, 3.85441864372, 11506.7697697936],
    [0.00000000066, 6.02936685131, 4292.3308329504],
    [0.00000000061, 4.89240500838, 17789.845619785],
    [0.0000000006, 5.0774010541, 8031.0922630584],
    [0.00000000072, 0.54262605719, 7084.8967811152],
    [0.00000000056, 2.50990462518, 17298.1823273262],
    [0.00000000053, 1.87036407674, 5486.777843175],
    [0.00000000051, 6.28204170236, 11926.2544136688],
    [0.00000000053, 5.66935852599, 1990.745017041],
    [0.00000000047, 3.66094638012, 12036.4607348882],
    [0.00000000045, 4.65961589618, 16200.7727245012],
    [0.00000000045, 3.61780946585, 26.2983197998],
    [0.00000000058, 0.18496674798, 7632.9432596502],
    [0.00000000044, 1.58200851396, 7234.794256242],
    [0.00000000044, 1.14614508037, 3894.1818295422],
    [0.00000000051, 0.41946249166, 801.8209311238],
    [0.00000000042, 0.62986376371, 10973.55568635],
    [0.00000000045, 2.33200804386, 8635.9420037632],
    [0.0000000004, 3.9321277526, 21228.3920235458],
    [0.00000000044, 2.01033525641, 11015.1064773348],
    [0.00000000033, 3.02246656554, 9917.6968745098],
    [0.00000000033, 3.7105016575, 8429.2412664666],
    [0.00000000032, 3.41723187259, 10177.2576795336],
    [0.00000000042, 2.02019512893, 10575.4066829418],
    [0.00000000029, 2.46500931275, 13916.0191096416],
    [0.00000000029, 5.35406335386, 25158.6017197654],
    [0.00000000028, 2.98197398463, 6836.6452528338],
    [0.00000000034, 4.02207780217, 4136.9104335162],
    [0.0000000003, 3.47110495894, 14945.3161735544],
    [0.00000000025, 0.95642320199, 11712.9553182308],
    [0.00000000025, 5.25192937, 13119.72110282519],
    [0.00000000026, 3.86729241844, 12566.1516999828],
    [0.00000000024, 2.62532159808, 4535.0594369244],
    [0.00000000031, 3.85490065823, 13517.8701062334],
    [0.00000000022, 0.03124261976, 22483.84857449259],
    [0.00000000029, 4.93728357151, 17260.1546546904],
    [0.00000000021, 5.54978531051, 11371.7046897582],
    [0.00000000021, 4.81722387199, 9779.1086761254],
    [0.00000000021, 0.49258939822, 29088.811415985],
    [0.00000000027, 2.5478828998, 3496.032826134],
    [0.0000000002, 4.29962027085, 16858.4825329332],
    [0.00000000019, 0.80296713891, 16062.1845261168],
    [0.00000000022, 4.92626431648, 18875.525869774],
    [0.00000000024, 4.26718301273, 2388.8940204492],
    [0.00000000023, 5.68911816577, 16460.33352952499],
    [0.00000000019, 1.14863784195, 4164.311989613],
    [0.00000000017, 0.36878662118, 12721.572099417],
    [0.00000000016, 3.95088035309, 3097.88382272579],
    [0.00000000015, 6.00288249864, 23543.23050468179],
    [0.00000000016, 1.91412161754, 33019.0211122046],
    [0.00000000015, 2.63674101057, 19004.6479494084],
    [0.00000000016, 3.34169715959, 14143.4952424306],
    [0.00000000014, 3.95810789228, 6283.0758499914],
    [0.00000000016, 0.09367850268, 22805.7355659936],
    [0.00000000015, 5.52045794098, 3738.761430108],
    [0.00000000014, 6.13364752678, 19800.9459562248],
    [0.00000000014, 1.22470284196, 4933.2084403326],
    [0.00000000014, 1.10487812726, 14314.1681130498],
    [0.00000000013, 2.20309010529, 15664.03552270859],
    [0.00000000017, 1.23966987092, 19402.7969528166],
    [0.00000000017, 4.3836515467, 6438.4962494256],
    [0.00000000012, 5.80978781305, 21954.15760939799],
    [0.00000000011, 4.17818694712, 15671.0817594066],
    [0.00000000011, 4.47007479869, 21947.1113727],
    [0.00000000011, 3.33551284821, 36949.2308084242],
    [0.00000000011, 2.86366537502, 2787.0430238574],
    [0.00000000014, 4.50116511175, 640.8776073822],
    [0.00000000012, 1.54054213662, 26735.9452622132],
    [0.00000000011, 4.03696511819, 18606.4989460002],
    [0.00000000012, 3.07290774532, 22345.2603761082],
    [0.00000000013, 6.21889991907, 9380.9596727172],
    [0.0000000001, 1.68382745113, 22743.4093795164],
    [0.00000000009, 5.78653918203, 6040.3472460174],
];

const L0: &[Term] = &[
    [1.75347045953, 0.0, 0.0],
    [0.00003417568, 2.82887613695, 3.523118349],
    [0.00002056367, 3.87949142209, 11506.7697697936],
    [0.00001664099, 6.13527980181, 3930.2096962196],
    [0.00001263517, 2.03240137643, 529.6909650946],
    [0.00001268612, 1.27476353113, 7860.4193924392],
    [0.00000901845, 2.04505535578, 26.2983197998],
    [0.00000853421, 3.50940633514, 398.1490034082],
    [0.00001089612, 1.10654596593, 1577.3435424478],
    [0.00000603627, 2.69740270021, 11790.6290886588],
    [0.00000480499, 4.20673996315, 775.522611324],
    [0.00000514274, 2.73992482008, 5753.3848848968],
    [0.00000356604, 2.91954116867, 0.0673103028],
    [0.000003773, 3.44491389994, 10977.078804699],
    [0.00000278206, 1.90026794482, 796.2980068164],
    [0.00000237655, 1.15089696936, 5223.6939198022],
    [0.00000329412, 4.12004912713, 15720.8387848784],
    [0.00000277296, 5.02126378438, 17260.1546546904],
    [0.00000166274, 4.80363171369, 2544.3144198834],
    [0.00000193313, 5.54264947747, 19651.048481098],
    [0.00000126209, 1.08301258683, 20.7753954924],
    [0.00000155515, 0.83287668374, 213.299095438],
    [0.00000144608, 2.52725393873, 5507.5532386674],
    [0.00000115148, 0.64544911683, 0.9803210682],
    [0.00000101743, 4.26677440004, 7.1135470008],
    [0.00000097618, 0.68083486618, 155.4203994342],
    [0.00000118606, 0.68201823673, 23581.2581773176],
    [0.00000085357, 6.20697813052, 2146.1654164752],
    [0.00000105933, 5.2413034795, 5884.9268465832],
    [0.0000009988, 3.41037473463, 2942.4634232916],
    [0.00000071851, 4.67851471596, 801.8209311238],
    [0.00000090341, 3.32981515313, 12139.5535091068],
    [0.0000005921, 4.26024641987, 6283.0758499914],
    [0.00000070843, 4.59767130046, 16730.4636895958],
    [0.00000074962, 2.10452615052, 27511.4678735372],
    [0.0000005115, 0.35424356502, 5486.777843175],
    [0.00000063932, 3.95179679832, 9437.762934887],
    [0.00000045525, 0.61465065002, 4694.0029547076],
    [0.00000051628, 3.49447163459, 3154.6870848956],
    [0.00000048131, 3.0064346796, 10447.3878396044],
    [0.00000045019, 1.04386927658, 12036.4607348882],
    [0.00000046715, 0.49143680465, 1194.4470102246],
    [0.00000046759, 1.33012148951, 1748.016413067],
    [0.00000048385, 3.52698826372, 31441.6775697568],
    [0.00000047031, 1.07806294297, 19804.8272915828],
    [0.00000037533, 2.52967603853, 1059.3819301892],
    [0.00000044533, 0.7895129393, 8827.3902698748],
    [0.00000034096, 2.27690611671, 2352.8661537718],
    [0.0000004194, 6.16068376763, 23013.5395395872],
    [0.00000028348, 2.73749341898, 1349.8674096588],
    [0.00000036666, 5.37680539645, 13367.9726311066],
    [0.00000024795, 2.18836109415, 8429.2412664666],
    [0.00000023366, 3.25869062032, 17789.845619785],
    [0.0000003172, 4.94940506479, 35371.8872659764],
    [0.00000023001, 1.7564812996, 5088.6288397668],
    [0.00000020499, 4.14578169479, 951.7184062506],
    [0.00000024741, 0.21484762137, 3.5904286518],
    [0.0000002331, 0.51846653998, 17298.1823273262],
    [0.00000017482, 4.56053679528, 135.0650800354],
    [0.00000021679, 5.55449807218, 553.5694028424],
    [0.00000016304, 2.02832577729, 3340.6124266998],
    [0.00000021104, 2.62070198957, 11769.8536931664],
    [0.00000021044, 0.08859182716, 39302.096962196],
    [0.00000020243, 0.37128778413, 283.8593188652],
    [0.00000014426, 4.19375062168, 242.728603974],
    [0.00000014346, 3.72355084422, 38.0276726358],
    [0.0000001371, 4.02153882351, 11371.7046897582],
    [0.00000017623, 4.07901463707, 11926.2544136688],
    [0.00000013692, 4.93319481946, 7084.8967811152],
    [0.00000011735, 2.62423143284, 955.5997416086],
    [0.00000015597, 1.94303450508, 21228.3920235458],
    [0.00000011546, 3.59026876736, 8031.0922630584],
    [0.00000013819, 5.74752338634, 22483.84857449259],
    [0.00000011485, 4.16610987227, 16200.7727245012],
    [0.00000012503, 1.13052412208, 5.5229243074],
    [0.00000014093, 1.51091980242, 43232.3066584156],
    [0.00000011466, 3.75017676574, 11513.8833167944],
    [0.00000011696, 0.83220994329, 11499.6562227928],
    [0.00000009619, 5.36462263641, 1592.5960136328],
    [0.00000012342, 2.45574004852, 6069.7767545534],
    [0.0000001186, 1.00260673035, 632.7837393132],
    [0.00000010817, 0.32788145266, 103.0927742186],
    [0.00000009876, 4.12863931263, 45892.73043315699],
    [0.0000000801, 5.82164144038, 28.4491874678],
    [0.00000010741, 3.36732792685, 25158.6017197654],
    [0.00000007985, 5.85365119491, 14314.1681130498],
    [0.00000010543, 4.44997837453, 14712.317116458],
    [0.00000010175, 3.16100263499, 4690.4798363586],
    [0.00000009128, 0.48106296001, 522.5774180938],
    [0.00000009509, 2.93320436084, 47162.5163546352],
    [0.00000006837, 5.42394668954, 10973.55568635],
    [0.00000008006, 6.2711596974, 426.598190876],
    [0.00000006382, 0.15862971523, 4164.311989613],
    [0.00000006751, 0.27934325018, 5856.4776591154],
    [0.00000006673, 0.0921784662, 11015.1064773348],
    [0.00000005584, 2.37867231401, 10213.285546211],
    [0.00000005527, 4.41301821434, 23543.23050468179],
    [0.00000007169, 4.00186428556, 74.7815985673],
    [0.00000007527, 4.79137845181, 29088.811415985],
    [0.00000007204, 4.38499497358, 316.3918696566],
    [0.00000005399, 5.39282428902, 419.4846438752],
    [0.00000007059, 0.32232360592, 263.0839233728],
    [0.00000005253, 2.56541131756, 9917.6968745098],
    [0.00000006722, 1.01064152307, 28766.924424484],
    [0.00000006877, 4.20470986366, 18209.33026366019],
    [0.00000006455, 4.35544620805, 51092.7260508548],
    [0.00000004744, 1.40332012966, 17256.6315363414],
    [0.00000004446, 5.65930761674, 12566.1516999828],
    [0.00000004985, 3.78788663656, 13521.7514415914],
    [0.00000004502, 4.56683548253, 4292.3308329504],
    [0.00000004328, 0.97361840535, 13916.0191096416],
    [0.00000004441, 3.65250172831, 206.1855484372],
    [0.0000000402, 0.83995823171, 20.3553193988],
    [0.00000004173, 4.06791845567, 8635.9420037632],
    [0.00000004098, 0.66836185602, 16496.3613962024],
    [0.00000005335, 6.21522046402, 33019.0211122046],
    [0.00000005385, 6.27687061287, 17654.7805397496],
    [0.00000003785, 2.34369213733, 3.881335358],
    [0.00000005073, 4.99403880443, 7632.9432596502],
    [0.00000004207, 1.90667818235, 245.8316462294],
    [0.0000000396, 1.53424731026, 14945.3161735544],
    [0.00000003323, 4.25888437687, 10984.1923516998],
    [0.00000003647, 5.0398326351, 536.8045120954],
    [0.00000004286, 4.46501131248, 10873.9860304804],
    [0.00000004405, 5.77764606448, 55022.9357470744],
    [0.00000003086, 3.64646921512, 10.6366653498],
    [0.0000000302, 2.122193942, 20426.571092422],
    [0.00000003192, 0.42335375191, 10969.9652576982],
    [0.00000002766, 4.67861371194, 6812.766815086],
    [0.0000000381, 1.35569924291, 36949.2308084242],
    [0.00000002852, 3.23114265282, 20199.094959633],
    [0.0000000307, 6.10167662859, 4732.0306273434],
    [0.00000002806, 2.8058688132, 16858.4825329332],
    [0.00000002782, 1.14478374402, 14143.4952424306],
    [0.00000002731, 5.32213833366, 21954.15760939799],
    [0.00000002621, 3.85639359948, 266.6070417218],
    [0.00000002435, 3.51505970838, 24356.7807886416],
    [0.00000003114, 0.54425384718, 10575.4066829418],
    [0.00000002723, 0.61021915597, 28237.2334593894],
    [0.00000002324, 0.89924109862, 71980.63357473118],
    [0.00000002215, 3.95414518292, 1990.745017041],
    [0.00000003019, 0.91661937679, 58953.145443294],
    [0.00000002575, 2.97515254332, 18875.525869774],
    [0.00000002173, 0.11583568176, 7234.794256242],
    [0.00000002073, 0.01674945568, 7238.6755916],
    [0.00000002019, 0.81393923317, 170.6728706192],
    [0.00000002761, 1.81743210674, 20597.2439630412],
    [0.00000002736, 2.77921095762, 40879.4405046438],
    [0.00000002008, 5.97351580195, 3894.1818295422],
    [0.00000001972, 0.54779952194, 3738.761430108],
    [0.00000002381, 0.10581361289, 7.046236698],
    [0.00000001949, 4.86892513469, 36.0278666774],
    [0.00000002344, 4.89018951676, 17267.26820169119],
    [0.00000002363, 1.98805137731, 17253.04110768959],
    [0.00000002355, 4.84594206069, 11712.9553182308],
    [0.00000002467, 5.71953046861, 12352.8526045448],
    [0.0000000192, 4.94858412434, 28286.9904848612],
    [0.00000001887, 3.74365662683, 23.8784377478],
    [0.00000001837, 4.63732455858, 19800.9459562248],
    [0.0000000204, 2.98513423294, 3128.3887650958],
    [0.00000001741, 6.27908628571, 15110.4661198662],
    [0.00000001883, 1.90364058477, 15.252471185],
    [0.000000017, 4.40595700007, 110.2063212194],
    [0.00000001755, 2.46323385074, 6681.2248533996],
    [0.0000000171, 5.05944861631, 23141.5583829246],
    [0.00000002067, 2.37745191912, 13517.8701062334],
    [0.00000001613, 0.48531941036, 1551.045222648],
    [0.00000002119, 3.73579891483, 39609.6545831656],
    [0.00000001534, 4.44624526442, 12168.0026965746],
    [0.00000002076, 2.33873748228, 62883.3551395136],
    [0.00000001478, 1.8288459292, 18052.9295431578],
    [0.00000001502, 3.73182554337, 15671.0817594066],
    [0.00000001762, 4.41458256074, 22805.7355659936],
    [0.00000001971, 4.2025913365, 44809.6502008634],
    [0.00000001485, 0.08946515261, 32217.2001810808],
    [0.00000001666, 2.77210021178, 25934.1243310894],
    [0.00000001855, 4.95600453067, 17996.0311682222],
    [0.00000001397, 0.00971883426, 11087.2851259184],
    [0.0000000181, 0.49112137707, 1.4844727083],
    [0.00000001514, 1.01287077334, 5643.1785636774],
    [0.00000001324, 4.39443492907, 5216.5803728014],
    [0.00000001594, 1.33675864047, 22003.9146348698],
    [0.00000001353, 1.94885544443, 10177.2576795336],
    [0.00000001497, 4.20038882312, 29864.334027309],
    [0.00000001218, 5.56505373702, 29296.6153895786],
    [0.00000001469, 6.02534903428, 5746.271337896],
    [0.00000001453, 5.2080390399, 11403.676995575],
    [0.00000001202, 4.76294118327, 4705.7323075436],
    [0.00000001204, 0.18474078575, 22743.4093795164],
    [0.00000001638, 0.39812724569, 12416.5885028482],
    [0.00000001195, 0.91994351094, 2379.1644735716],
    [0.00000001123, 3.66097422531, 20995.3929664494],
    [0.0000000138, 2.61774284081, 5760.4984318976],
    [0.00000001138, 1.51314274729, 36147.4098773004],
    [0.00000001426, 4.34579174672, 26087.9031415742],
    [0.00000001218, 3.12559020465, 1589.0728952838],
    [0.00000001254, 5.62610144087, 33794.5437235286],
    [0.00000001293, 3.45312578838, 12132.439962106],
    [0.00000001474, 2.54295185667, 155427.542936241],
    [0.00000001417, 4.2102206154, 16460.33352952499],
    [0.00000001079, 6.20304501787, 3.2863574178],
    [0.00000001424, 5.62585734565, 48739.859897083],
    [0.00000001155, 1.24953850798, 8662.240323563],
    [0.00000001182, 1.20649371461, 131.5419616864],
    [0.00000001401, 3.63673008074, 23539.7073863328],
    [0.00000001433, 3.76081577792, 66813.5648357332],
    [0.00000001242, 5.85250572727, 26735.9452622132],
    [0.0000000102, 0.60294039107, 26084.0218062162],
    [0.00000001218, 0.0659357321, 12146.6670561076],
    [0.00000001107, 0.7132645921, 220.4126424388],
    [0.00000001147, 5.73083497116, 11609.8625440122],
    [0.00000001006, 0.39074264079, 949.1756089698],
    [0.0000000092, 1.52166103662, 6836.6452528338],
    [0.00000001245, 1.02873407554, 11190.377900137],
    [0.00000001093, 3.99563484052, 10344.2950653858],
    [0.00000000926, 3.7819916695, 13119.72110282519],
    [0.00000001113, 2.13709308598, 34520.3093093808],
    [0.0000000101, 0.7673073937, 37724.7534197482],
    [0.00000000863, 1.98719268927, 735.8765135318],
    [0.00000000865, 2.93655318258, 40077.61957352],
    [0.0000000091, 0.09643116941, 33326.5787331742],
    [0.00000000804, 5.49214852461, 23937.856389741],
    [0.00000001029, 3.19300024869, 5120.6011455836],
    [0.00000000782, 6.16768910402, 38.1330356378],
    [0.0000000079, 6.00737891213, 3634.6210245184],
    [0.00000000776, 4.0985507631, 14.2270940016],
    [0.00000000786, 2.01442104509, 25685.872802808],
    [0.00000000762, 5.18402756732, 16737.5772365966],
    [0.00000001031, 0.76583786068, 52670.0695933026],
    [0.00000000931, 1.47862649522, 1162.4747044078],
    [0.00000000984, 6.04245370503, 19402.7969528166],
    [0.00000000893, 1.00581566994, 30666.1549584328],
    [0.00000000798, 1.57342358858, 16723.350142595],
    [0.00000000734, 4.30407893983, 9623.6882766912],
    [0.00000000898, 6.13947736104, 18073.7049386502],
    [0.00000000991, 5.18285510707, 70743.77453195279],
    [0.00000000841, 1.1206213159, 11933.3679606696],
    [0.0000000091, 1.09760618462, 3496.032826134],
    [0.00000000717, 0.16688678895, 11.729352836],
    [0.00000000691, 5.05930327686, 639.897286314],
    [0.00000000794, 2.19087810056, 41654.9631159678],
    [0.00000000672, 1.91096010882, 3.9321532631],
    [0.00000000776, 4.09303126894, 10454.5013866052],
    [0.0000000066, 5.61493500889, 16062.1845261168],
    [0.00000000669, 1.01190002744, 5230.807466803],
    [0.00000000654, 4.35976933778, 44007.8292697396],
    [0.0000000073, 0.98010398226, 1052.2683831884],
    [0.00000000733, 2.784257028, 640.8776073822],
    [0.00000000619, 6.25180004013, 9225.539273283],
    [0.00000000806, 5.61327372271, 16627.3709153772],
    [0.00000000603, 5.24500041337, 10557.5941608238],
    [0.00000000603, 2.42766391327, 29026.48522950779],
    [0.0000000076, 4.213172194, 377.3736079158],
    [0.00000000637, 0.19065089624, 27707.5424942948],
    [0.00000000569, 1.81053937355, 4590.910180489],
    [0.00000000574, 3.35420777123, 9779.1086761254],
    [0.00000000567, 3.94902739896, 98068.53671630539],
    [0.00000000573, 3.16435264604, 533.2140834436],
    [0.00000000629, 2.68331418812, 12592.4500197826],
    [0.00000000747, 2.18891468428, 56600.2792895222],
    [0.00000000553, 1.03907479785, 26880.3198130326],
    [0.00000000526, 2.12284939746, 9388.0059094152],
    [0.00000000521, 2.28857901092, 32370.9789915656],
    [0.00000000544, 6.26967919381, 10440.2742926036],
    [0.00000000694, 5.44915439056, 26482.1708096244],
    [0.0000000065, 2.44100285158, 34596.3646546524],
    [0.00000000614, 3.61387431232, 45585.1728121874],
    [0.00000000678, 6.09190163531, 135.62532501],
    [0.00000000556, 3.17209663377, 18422.62935909819],
    [0.00000000685, 1.59090527021, 22345.2603761082],
    [0.0000000051, 3.84309455976, 28628.3362260996],
    [0.00000000687, 0.32167086581, 74673.9842281724],
    [0.00000000486, 0.77746204893, 27.4015560968],
    [0.00000000616, 4.06539884126, 227.476132789],
    [0.00000000492, 5.7828369829, 47938.0389659592],
    [0.00000000582, 3.24533095662, 153.7788104848],
    [0.0000000049, 6.07405057311, 17782.7320727842],
    [0.00000000552, 2.17029952656, 4136.9104335162],
    [0.00000000478, 1.16435057393, 19004.6479494084],
    [0.00000000528, 0.81926454463, 813.5502839598],
    [0.00000000547, 2.54321519887, 2388.8940204492],
    [0.00000000537, 1.75246729003, 33990.6183442862],
    [0.00000000453, 1.07264244168, 18319.5365848796],
    [0.0000000058, 5.07894799458, 24279.10701821359],
    [0.00000000413, 5.24790162323, 12029.3471878874],
    [0.00000000421, 4.89226582783, 21424.4666443034],
    [0.00000000571, 3.32898861389, 72140.6286666874],
    [0.00000000518, 6.17617826756, 0.2438174835],
    [0.00000000554, 3.24665439434, 2107.0345075424],
    [0.00000000481, 6.02733239702, 23020.65308658799],
    [0.00000000542, 3.61191230802, 60530.4889857418],
    [0.000000004, 5.18713748867, 12721.572099417],
    [0.00000000421, 2.50532762603, 3097.88382272579],
    [0.00000000469, 5.03643513578, 49515.382508407],
    [0.00000000385, 3.87728250982, 4686.8894077068],
    [0.00000000425, 4.70062675192, 846.0828347512],
    [0.00000000477, 3.87501161918, 38526.574350872],
    [0.00000000471, 3.12102194536, 23006.42599258639],
    [0.0000000037, 2.86799847412, 29822.7832363242],
    [0.00000000505, 0.10449607697, 59414.4818747484],
    [0.00000000502, 0.73717229357, 12489.8856287072],
    [0.00000000369, 0.92260111131, 51868.2486621788],
    [0.00000000476, 3.42190184101, 25287.7237993998],
    [0.00000000396, 4.11810904354, 16522.6597160022],
    [0.0000000048, 5.36572651088, 348.924420448],
    [0.00000000352, 4.24995298356, 31968.9486527994],
    [0.00000000478, 1.74363440192, 78604.19392439199],
    [0.00000000348, 2.99652875029, 21947.1113727],
    [0.00000000338, 3.56081345795, 10770.8932562618],
    [0.00000000328, 5.67064841331, 31570.7996493912],
    [0.00000000344, 2.06546633735, 49.7570254718],
    [0.00000000435, 1.08518807221, 7079.3738568078],
    [0.00000000366, 4.1935980842, 11919.140866668],
    [0.00000000341, 2.68612860807, 11.0457002639],
    [0.00000000315, 5.63357264994, 568.8218740274],
    [0.00000000388, 2.92810485489, 6438.4962494256],
    [0.00000000355, 0.17546199964, 53445.5922046266],
    [0.00000000312, 2.86003566407, 10988.808157535],
    [0.00000000298, 5.16265765449, 5333.9002410216],
    [0.00000000293, 0.7368875604, 15664.03552270859],
    [0.00000000329, 0.69281460243, 10660.6869350424],
    [0.00000000394, 5.03483852691, 64460.6986819614],
    [0.00000000282, 2.70852249695, 27043.5028831828],
    [0.00000000353, 5.30796699337, 42456.7840470916],
    [0.00000000289, 4.26271933232, 14919.0178537546],
    [0.00000000301, 4.97643768418, 11080.1715789176],
    [0.00000000268, 2.47224339731, 664.75604513],
    [0.00000000268, 1.15202224909, 16840.67001081519],
    [0.00000000276, 2.34545185465, 55798.4583583984],
    [0.00000000259, 0.42949744414, 35050.00027447539],
    [0.00000000316, 3.44858656768, 11823.1616394502],
    [0.00000000353, 1.57655837591, 4701.1165017084],
    [0.00000000292, 2.9487222616, 24072.9214697764],
    [0.00000000329, 0.96645552608, 29424.634232916],
    [0.00000000275, 4.19797607637, 5650.2921106782],
    [0.00000000276, 2.74598128645, 53131.406024757],
    [0.00000000253, 4.82823506994, 24889.5747959916],
    [0.00000000329, 5.25221572784, 28230.18722269139],
    [0.00000000333, 3.1655614773, 82534.40362061159],
    [0.00000000241, 4.6955705083, 32765.2466596158],
    [0.00000000269, 5.55318663073, 20452.8694122218],
    [0.0000000029, 5.70141882483, 77.673770428],
    [0.00000000246, 2.59305773503, 11293.4706743556],
    [0.00000000322, 1.03422001842, 3646.3503773544],
    [0.00000000267, 1.59738339264, 57375.8019008462],
    [0.00000000295, 3.60936603712, 4804.209275927],
    [0.00000000236, 4.19817431922, 19.66976089979],
    [0.00000000231, 2.34937701328, 6309.3741697912],
    [0.00000000275, 5.50306930248, 32.5325507914],
    [0.00000000219, 2.56963949579, 18606.4989460002],
    [0.00000000223, 5.23334210294, 56.8983749356],
    [0.00000000256, 5.17568626365, 16097.6799502826],
    [0.00000000234, 0.80174426266, 4535.0594369244],
    [0.00000000245, 3.96486270306, 22.7752014508],
    [0.00000000286, 0.17451430479, 68390.90837818099],
    [0.0000000022, 4.7207808197, 6.62855890001],
    [0.00000000207, 5.71701403951, 41.5507909848],
    [0.00000000266, 4.24261686878, 12341.8069042809],
    [0.00000000227, 1.95002371807, 11720.0688652316],
    [0.00000000261, 0.45679975357, 46386.9937433112],
    [0.00000000209, 1.21374651467, 34513.2630726828],
    [0.00000000201, 3.91339998609, 2699.7348193176],
    [0.00000000202, 6.06907531859, 34911.412076091],
    [0.00000000212, 5.5370665558, 1066.49547719],
    [0.0000000025, 0.62127368578, 17363.24742890899],
    [0.00000000206, 3.76821891192, 59728.668054618],
    [0.00000000275, 5.04826903506, 73.297125859],
    [0.00000000212, 1.72567338062, 5429.8794682394],
    [0.00000000212, 3.55542968976, 9814.6041002912],
    [0.00000000265, 0.74645349428, 1975.492545856],
    [0.00000000228, 5.85373115869, 128.0188433374],
    [0.00000000217, 0.514482793, 65697.55772473979],
    [0.00000000239, 4.76014152567, 9380.9596727172],
    [0.0000000022, 5.75012110079, 29.429508536],
    [0.00000000208, 0.25259877498, 149.5631971346],
    [0.00000000187, 4.03230554714, 467.9649903544],
    [0.00000000181, 1.21100126167, 4061.2192153944],
    [0.00000000191, 0.81439892595, 22779.4372461938],
    [0.00000000181, 1.59364857291, 7058.5984613154],
    [0.00000000181, 6.18753854625, 22490.9621214934],
    [0.00000000194, 5.60679239375, 18849.2275499742],
    [0.00000000235, 6.23445948872, 17157.0618804718],
    [0.00000000184, 0.37624828055, 27832.0382192832],
    [0.00000000174, 3.29490992673, 15141.390794312],
    [0.00000000194, 2.72069675458, 22476.73502749179],
    [0.00000000198, 3.54061588502, 30.914125635],
    [0.00000000239, 2.17102934823, 16943.7627850338],
    [0.00000000232, 2.87097785983, 10021.8372800994],
    [0.00000000231, 6.17477329416, 5436.9930152402],
    [0.00000000195, 0.09045393425, 156.4007205024],
    [0.00000000182, 4.98831507798, 11300.5842213564],
    [0.000000002, 3.0190550643, 61306.0115970658],
    [0.00000000232, 4.58745244942, 86464.6133168312],
    [0.00000000184, 5.11001550805, 16207.886271502],
    [0.0000000019, 0.70499247881, 24383.0791084414],
    [0.00000000226, 0.79861489123, 31172.650645983],
    [0.00000000169, 0.91318727, 95.9792272178],
    [0.00000000165, 4.40210341704, 21548.9623692918],
    [0.00000000211, 5.73370637657, 151.8972810852],
    [0.00000000173, 1.30278647993, 6275.9623029906],
    [0.00000000204, 0.42643085174, 515.463871093],
    [0.00000000159, 5.21245457737, 7342.4577801806],
    [0.00000000172, 2.89544284774, 5326.7866940208],
    [0.00000000162, 1.14463744123, 16193.65917750039],
    [0.0000000016, 6.23798383332, 202.2533951741],
    [0.00000000203, 0.88244254653, 52175.8062831484],
    [0.00000000163, 4.33502167776, 6040.3472460174],
    [0.00000000208, 1.59731643606, 72321.1180744006],
    [0.00000000154, 0.23838280353, 35707.7100829074],
    [0.00000000194, 1.88798368492, 50317.2034395308],
    [0.0000000015, 3.1299975301, 799.8211251654],
    [0.000000002, 5.82742861492, 24065.80792277559],
    [0.00000000192, 1.33928820063, 394.6258850592],
    [0.00000000188, 3.25645848591, 40273.6941942776],
    [0.00000000149, 2.65697593276, 21.335640467],
    [0.00000000146, 5.58021191726, 412.3710968744],
    [0.00000000154, 5.19091188815, 63658.8777508376],
    [0.00000000143, 3.28248547724, 29.8214381488],
    [0.00000000142, 0.71624568962, 124156.43985787958],
    [0.0000000014, 4.97612440269, 158.9435177832],
    [0.00000000139, 4.62804919631, 4907.3020501456],
    [0.00000000147, 5.09968173397, 661.232926781],
    [0.00000000165, 2.16276613982, 491.6632924588],
    [0.00000000134, 4.79432636012, 111.1866422876],
    [0.0000000014, 1.27748013377, 107.6635239386],
    [0.00000000188, 3.92635222205, 83286.91426955358],
    [0.00000000143, 2.21181743964, 26709.6469424134],
    [0.00000000183, 5.43418358741, 369.6998159404],
    [0.00000000134, 3.09132862833, 17.812522118],
    [0.00000000142, 1.13181855684, 2787.0430238574],
    [0.00000000146, 1.33917184985, 33460.92737919159],
    [0.00000000132, 3.13275376701, 17796.9591667858],
    [0.00000000169, 0.30960187149, 12323.4230960088],
    [0.00000000181, 4.22950689883, 966.9708774356],
    [0.00000000132, 3.03855695921, 37455.7264959744],
    [0.00000000145, 5.07330784304, 87.30820453981],
    [0.00000000132, 2.20690795866, 30774.5016425748],
    [0.00000000133, 5.65471067133, 31.9723058168],
    [0.00000000126, 0.19761813624, 16310.9790457206],
    [0.00000000149, 4.4405072941, 65236.2212932854],
    [0.00000000125, 6.23421945419, 24491.4257925834],
    [0.00000000124, 1.58391566705, 12242.6462833254],
    [0.00000000151, 3.48619004432, 6133.5126528568],
    [0.00000000119, 1.14788243795, 1265.5674786264],
    [0.00000000138, 2.1396979977, 28313.288804661],
    [0.00000000125, 0.92260702404, 12043.574281889],
    [0.00000000145, 2.74244048616, 32367.0976562076],
    [0.0000000016, 0.47904110477, 22380.755800274],
    [0.00000000162, 6.0093078358, 90394.82301305079],
    [0.00000000118, 0.63846333239, 6.0659156298],
    [0.00000000142, 0.94055996054, 18216.443810661],
    [0.00000000142, 4.32726868695, 18202.21671665939],
    [0.00000000125, 3.61729761964, 11520.9968637952],
    [0.00000000119, 5.96432932401, 1385.8952763362],
    [0.00000000114, 1.60068036108, 37853.8754993826],
    [0.00000000153, 2.62741332311, 34115.1140692746],
    [0.00000000112, 4.92889233335, 56.8032621698],
    [0.00000000145, 3.31842595047, 54247.4131357504],
    [0.00000000154, 4.67238235359, 6037.244203762],
    [0.00000000117, 4.11827704896, 9924.8104215106],
    [0.00000000115, 0.23374479051, 418.9243989006],
    [0.00000000151, 3.02006444276, 76251.32777062019],
    [0.00000000113, 6.04823967583, 27177.8515292002],
    [0.00000000114, 0.33035299864, 67589.08744705719],
    [0.00000000108, 4.00710268632, 10241.2022911672],
    [0.00000000148, 2.16872122701, 6386.16862421],
    [0.00000000104, 1.54931540602, 127.9515330346],
    [0.00000000113, 6.12287495045, 433.7117378768],
    [0.00000000104, 2.31421997059, 5017.508371365],
    [0.00000000125, 1.14419195615, 625.6701923124],
    [0.00000000141, 5.58918050624, 7576.560073574],
    [0.00000000106, 3.78471463446, 10239.5838660108],
    [0.000000001, 1.54289303084, 15508.6151232744],
    [0.00000000101, 4.91289409429, 401.6721217572],
    [0.000000001, 6.01902473165, 7477.522860216],
    [0.00000000097, 3.66594505414, 11616.976091013],
    [0.00000000126, 2.14242420478, 15265.8865193004],
    [0.00000000135, 6.19754833693, 12455.9453787634],
    [0.00000000097, 2.06249361724, 38650.173506199],
    [0.00000000101, 3.63514752388, 30639.856638633],
    [0.00000000128, 2.77174861901, 79219.3091663312],
    [0.00000000094, 5.3635318526, 46848.3301747656],
    [0.00000000099, 6.16653652877, 8982.810669309],
    [0.00000000121, 1.26205745011, 17892.93839400359],
    [0.00000000094, 1.78276144997, 27433.88921587499],
    [0.0000000011, 5.8617633416, 69166.430989505],
    [0.00000000116, 4.19967201116, 206.7007372966],
    [0.00000000094, 4.0369980317, 33716.9650658664],
    [0.00000000099, 1.37438108636, 1039.0266107904],
    [0.00000000107, 4.2876969684, 10027.9031957292],
    [0.00000000104, 2.5860818131, 149144.46708624958],
    [0.00000000108, 0.52696637156, 276.7457718644],
    [0.00000000093, 5.58220817886, 3104.9300594238],
    [0.00000000102, 3.5740094934, 32243.4985008806],
    [0.00000000086, 2.09712895983, 4274.5183108324],
    [0.00000000104, 3.39218586218, 290.972865866],
    [0.00000000102, 1.16266218635, 1478.8665740644],
    [0.00000000106, 2.89118444351, 39744.003229183],
    [0.00000000102, 0.60847330552, 3116.6594122598],
    [0.00000000105, 4.33553661264, 10881.0995774812],
    [0.00000000099, 0.77338079971, 11510.7019230567],
    [0.00000000099, 3.84401171431, 11502.8376165305],
    [0.00000000089, 1.3699903445, 4171.4255366138],
    [0.00000000111, 4.07604291819, 6208.2942514241],
    [0.00000000089, 4.4537182065, 792.7748884674],
    [0.00000000108, 4.74820694681, 58177.62283197],
    [0.00000000087, 0.40693187248, 5849.3641121146],
    [0.00000000096, 3.14770027916, 85502.38501632259],
    [0.00000000113, 1.14794363518, 94325.0327092704],
    [0.00000000114, 1.81217560117, 4214.0690150848],
    [0.00000000085, 1.75291830365, 71519.2971432768],
    [0.000000001, 5.32176017115, 2301.58581590939],
    [0.0000000011, 4.44276163272, 80181.53746683979],
    [0.0000000009, 5.40055742325, 72936.23331633979],
    [0.0000000008, 5.68129263074, 4933.2084403326],
    [0.00000000113, 3.2343685253, 8144.2787113044],
    [0.00000000081, 4.00400774863, 10138.1095169486],
    [0.00000000082, 4.86161640551, 40398.189919266],
    [0.00000000094, 4.03982888011, 29826.3063546732],
    [0.00000000081, 5.3047870089, 20760.4270331914],
    [0.00000000109, 1.24226578147, 10866.8724834796],
    [0.00000000087, 4.40657711727, 142.1786270362],
    [0.00000000107, 4.91580912547, 277.0349937414],
    [0.00000000094, 1.95613828047, 18003.144715223],
    [0.00000000086, 4.32507350945, 742.9900605326],
    [0.00000000083, 4.90662164029, 51.28033786241],
    [0.00000000103, 4.45535549579, 37057.5774925662],
    [0.00000000097, 3.97519881385, 18208.349942592],
    [0.00000000079, 3.03048221644, 838.9692877504],
    [0.00000000073, 3.05008665738, 567.7186377304],
    [0.00000000087, 0.88301562658, 28774.0379714848],
    [0.00000000084, 0.46604373274, 45.1412196366],
    [0.00000000078, 1.02261264863, 24336.0053931492],
    [0.00000000089, 0.00756499969, 16833.55646381439],
    [0.00000000072, 4.60198118463, 16524.2781411586],
    [0.00000000071, 4.79991265888, 2636.725472637],
    [0.00000000075, 5.43175553195, 21393.5419698576],
    [0.00000000072, 3.50412815174, 18451.07854656599],
    [0.00000000091, 4.65991101462, 12964.300703391],
    [0.00000000072, 1.50411273072, 10419.9862835076],
    [0.00000000069, 2.89173813508, 2547.8375382324],
    [0.0000000007, 3.6140710626, 30376.3526391666],
    [0.00000000069, 5.74231415107, 5642.1982426092],
    [0.00000000074, 2.87165330339, 27278.4688164408],
    [0.00000000082, 0.99965364507, 73096.64068572459],
    [0.00000000087, 4.27985221052, 28759.81087748319],
    [0.00000000068, 5.83300632466, 9910.583327509],
    [0.00000000082, 4.53994832532, 9711.5113260726],
    [0.00000000072, 5.43034146655, 58458.88213313979],
    [0.00000000077, 2.51017174908, 76.2660712756],
    [0.00000000073, 4.05190395225, 24492.40611365159],
    [0.0000000007, 1.71567212146, 11925.2740926006],
    [0.00000000066, 3.42546209721, 4157.1984426122],
    [0.00000000065, 5.77956195195, 17679.63929856559],
    [0.00000000076, 5.00786757141, 36173.7081971002],
    [0.00000000067, 5.86648434574, 36659.428489158],
    [0.0000000007, 5.02237968067, 34570.0663348526],
    [0.00000000071, 1.00555431226, 11492.542675792],
    [0.00000000078, 2.58332765495, 6062.6632075526],
    [0.00000000065, 1.4657208312, 23536.11695768099],
    [0.00000000078, 5.46967284524, 6076.8903015542],
    [0.00000000073, 1.97447419945, 1692.1656695024],
    [0.00000000065, 0.83854122441, 323.5054166574],
    [0.00000000087, 6.10828644575, 454.9093665273],
    [0.00000000088, 5.30975257411, 11146.2856028662],
    [0.00000000066, 2.46067068682, 10667.8004820432],
    [0.00000000082, 1.74186845545, 931.3630868518],
    [0.00000000062, 3.40917630141, 40796.33892267419],
    [0.00000000081, 6.17739672097, 62107.8325281896],
    [0.00000000066, 4.71060852945, 30220.9322397324],
    [0.00000000062, 3.83872627014, 149.8974751268],
    [0.00000000083, 3.09069450728, 1861.202861313],
    [0.00000000064, 5.67039592233, 35.5627344686],
    [0.00000000069, 4.64281410912, 10991.3058987006],
    [0.00000000065, 2.20381993412, 12345.739057544],
    [0.00000000063, 3.17542681213, 75449.50683949639],
    [0.00000000073, 0.01970117914, 21851.0648351794],
    [0.00000000062, 1.15584818943, 4.6158058352],
    [0.00000000081, 4.62828556645, 2069.0068349066],
    [0.0000000008, 5.86541259437, 84111.7471630594],
    [0.00000000062, 5.2218833623, 14169.7935622304],
    [0.00000000065, 2.6497616962, 11503.2466514446],
    [0.00000000065, 1.96765683911, 11510.2928881426],
    [0.00000000073, 5.44865656812, 2.9689454166],
    [0.00000000058, 4.9775036316, 2142.6422981262],
    [0.00000000069, 3.57381115599, 2540.7913015344],
    [0.00000000059, 3.88426997618, 41592.6369294906],
    [0.00000000075, 5.80779856963, 21150.8133658836],
    [0.00000000079, 2.56973143033, 98255.24240548999],
    [0.00000000077, 1.3034831816, 309.2783226558],
    [0.00000000056, 4.45974415332, 20894.77567920879],
    [0.00000000056, 0.78673722915, 1581.959348283],
    [0.00000000068, 4.05139997752, 6496.3749454294],
    [0.00000000075, 4.73032253908, 17576.546524347],
    [0.0000000006, 4.72026693245, 15567.988985188],
    [0.00000000054, 1.57289867924, 40803.3851593722],
    [0.00000000053, 2.67715210317, 62.3261864772],
    [0.00000000065, 5.13737826157, 270.1301600708],
    [0.00000000051, 0.99169676394, 13.241772398],
    [0.00000000072, 2.08731580421, 2390.8938264076],
    [0.00000000052, 5.44493955689, 33318.8160624582],
    [0.00000000062, 5.20792651582, 1009.6249047174],
    [0.00000000052, 0.86208462198, 5540.0857894588],
    [0.00000000056, 0.26182384792, 33163.395663024],
    [0.00000000059, 4.93468209338, 11705.84177123],
    [0.0000000006, 2.4205654349, 77026.8503819442],
    [0.0000000005, 1.6793005226, 8858.3149443206],
    [0.00000000053, 3.54831662058, 14867.73751589219],
    [0.00000000069, 6.28235283711, 40000.04091585779],
    [0.00000000069, 5.63743914218, 1539.315869812],
    [0.00000000067, 1.85890948352, 23116.63231380579],
    [0.00000000049, 2.69381032274, 533.6231183577],
    [0.00000000058, 4.29542761481, 2149.6885348242],
    [0.0000000005, 2.54128895829, 99.5696558696],
    [0.0000000005, 0.3993542689, 43340.6533425576],
    [0.00000000056, 4.45251762072, 35309.5610794992],
    [0.00000000057, 0.15806204737, 40103.9178933198],
    [0.00000000048, 2.25178500846, 1155.361157407],
    [0.00000000067, 2.15275390945, 3205.5473466644],
    [0.00000000053, 1.24155843499, 1343.2412490544],
    [0.00000000052, 0.44718352014, 1903.4368125012],
    [0.00000000066, 1.48719387592, 562.223515886],
    [0.00000000048, 0.28497293458, 6172.869528772],
    [0.00000000048, 2.28863803963, 22594.05489571199],
    [0.00000000047, 1.02754010282, 11396.5634485742],
    [0.00000000049, 3.55683156637, 2807.3983432562],
    [0.00000000052, 3.01824851166, 1573.8204240988],
    [0.00000000051, 2.33611140883, 1580.8666607968],
    [0.0000000006, 1.32287409116, 66038.04222440919],
    [0.00000000061, 2.99544484191, 18624.8827542723],
    [0.00000000047, 1.4121391944, 39601.8919124496],
    [0.00000000058, 1.35696456738, 24093.2767891752],
    [0.00000000046, 4.59788226248, 79379.716535716],
    [0.00000000053, 1.75097925292, 16414.07181993919],
    [0.00000000045, 2.12290417997, 234.1022933934],
    [0.00000000043, 5.38402050906, 15994.587176064],
    [0.00000000045, 6.15323982006, 21961.27115639879],
    [0.00000000048, 0.12388945863, 38500.2760310722],
    [0.00000000043, 4.28257001714, 23550.34405168259],
    [0.00000000049, 4.39510896035, 10550.480613823],
    [0.00000000049, 3.88974553494, 1047.6525773532],
    [0.00000000058, 1.004834265, 88041.956859279],
    [0.00000000052, 5.42489301719, 15781.288080626],
    [0.00000000043, 4.52680403654, 853.196381752],
    [0.00000000054, 3.65961662266, 290.4854794696],
    [0.00000000044, 2.09379070356, 36105.8590863156],
    [0.00000000043, 0.00221428223, 362.1211367308],
    [0.00000000044, 0.10064584648, 1744.493294718],
    [0.00000000041, 1.29011886402, 8584.6616659008],
    [0.00000000042, 2.30234736377, 21947.04406239719],
    [0.00000000043, 2.39046067003, 4797.0957289262],
    [0.00000000047, 3.93212104276, 6206.8097787158],
    [0.0000000004, 6.15051386781, 11094.3986729192],
    [0.00000000056, 3.99148727035, 102185.45210170955],
    [0.00000000051, 3.07824233774, 5863.5912061162],
    [0.00000000055, 1.7437263361, 36.6485629295],
    [0.00000000047, 5.06864259455, 17988.91762122139],
    [0.00000000051, 1.09794676063, 1062.9050485382],
    [0.00000000041, 5.38103310617, 17810.2009391838],
    [0.00000000044, 5.70175403185, 1751.539531416],
    [0.00000000046, 3.9822555922, 78263.70942472259],
    [0.00000000053, 5.95119479649, 30348.883772767],
    [0.00000000053, 3.53215469827, 1790.6426378858],
    [0.00000000041, 0.37632207964, 18100.00325845],
    [0.00000000038, 6.00309529386, 3185.1920272656],
    [0.00000000039, 1.175512346, 1685.0521225016],
    [0.00000000038, 0.99215633607, 36261.2794857498],
    [0.00000000038, 4.50229634111, 184.8499079702],
    [0.0000000004, 5.70916823878, 418.504322807],
    [0.00000000046, 0.83873908291, 4487.8174062704],
    [0.00000000038, 4.96113613525, 2409.249339848],
    [0.00000000038, 2.97694609743, 771.999492975],
    [0.00000000039, 0.96961342585, 28244.3470063902],
    [0.00000000045, 3.97286203201, 17046.8555592524],
    [0.00000000037, 1.83444382572, 13341.6743113068],
    [0.00000000043, 2.02700991344, 1293.4842235826],
    [0.00000000042, 3.86812785789, 28230.11991238859],
    [0.00000000052, 4.89850775286, 238714.45720579458],
    [0.00000000044, 3.84132110697, 80957.06007816379],
    [0.00000000037, 3.46990318553, 3956.5080160194],
    [0.00000000051, 3.33344086824, 16.83220104979],
    [0.00000000039, 4.32497341911, 550.0462844934],
    [0.00000000043, 1.59095521374, 44034.1275895394],
    [0.0000000004, 3.18660215215, 7856.89627409019],
    [0.00000000038, 0.34477028597, 1329.51209026],
    [0.0000000004, 2.50449584378, 7863.9425107882],
    [0.00000000037, 4.21056379703, 2675.8563815698],
    [0.00000000036, 4.59450271611, 1603.6418622476],
];

const L1: &[Term] = &[
    [6283.0758499914, 0.0, 0.0],
    [0.00000425257, 1.59049255748, 3.523118349],
    [0.00000099545, 2.96295877144, 1577.3435424478],
    [0.000001193, 5.79559871816, 26.2983197998],
    [0.00000071275, 1.13642055662, 529.6909650946],
    [0.00000067477, 1.87497151533, 398.1490034082],
    [0.00000055975, 2.17472344355, 155.4203994342],
    [0.00000044481, 0.39899507147, 796.2980068164],
    [0.00000035485, 0.46236919607, 775.522611324],
    [0.00000028952, 2.64790890596, 7.1135470008],
    [0.00000020603, 4.33625960184, 10977.078804699],
    [0.0000002085, 5.34134399203, 0.9803210682],
    [0.00000018506, 4.96837247313, 213.299095438],
    [0.00000017838, 2.88037851798, 5223.6939198022],
    [0.00000013636, 1.42833238289, 2146.1654164752],
    [0.00000013112, 0.03095387298, 2544.3144198834],
    [0.00000013265, 4.38291533638, 5507.5532386674],
    [0.00000009456, 2.70005112525, 242.728603974],
    [0.00000009167, 4.2364303112, 1349.8674096588],
    [0.00000011301, 2.83177207034, 1748.016413067],
    [0.00000011263, 5.27678132154, 1194.4470102246],
    [0.00000008331, 5.64275382104, 951.7184062506],
    [0.00000010627, 0.76670110895, 553.5694028424],
    [0.00000005578, 1.71183774881, 1059.3819301892],
    [0.00000005291, 2.68320317301, 6283.0758499914],
    [0.00000005861, 5.80499857376, 9437.762934887],
    [0.00000005447, 5.4682309591, 2352.8661537718],
    [0.00000005067, 2.05826735607, 4694.0029547076],
    [0.00000005289, 3.89764651999, 10447.3878396044],
    [0.00000004017, 1.86511465836, 5486.777843175],
    [0.0000000383, 5.49173309322, 16730.4636895958],
    [0.00000005059, 1.85780330198, 801.8209311238],
    [0.00000003653, 3.26262243592, 5088.6288397668],
    [0.00000003736, 0.94638371749, 3154.6870848956],
    [0.00000003096, 3.86915344435, 1592.5960136328],
    [0.00000003484, 2.5219756213, 11499.6562227928],
    [0.00000003358, 0.94553657896, 13367.9726311066],
    [0.00000003358, 2.06129238661, 11513.8833167944],
    [0.000000029, 2.32464208411, 20.3553193988],
    [0.00000002068, 6.20749652584, 11926.2544136688],
    [0.00000002147, 0.21423876981, 12036.4607348882],
    [0.00000001944, 3.70103176864, 8429.2412664666],
    [0.00000002113, 2.37207827875, 17298.1823273262],
    [0.00000001796, 1.61349311997, 17789.845619785],
    [0.00000002444, 4.66428715968, 4690.4798363586],
    [0.00000001828, 5.09807035241, 8031.0922630584],
    [0.00000001778, 3.02473091781, 5.5229243074],
    [0.00000001992, 2.26605403802, 522.5774180938],
    [0.0000000159, 4.63713748247, 3.2863574178],
    [0.00000001451, 6.06801482291, 4292.3308329504],
    [0.00000001375, 3.09301252192, 135.0650800354],
    [0.00000001305, 4.25197883859, 426.598190876],
    [0.00000001304, 0.51988432882, 3340.6124266998],
    [0.00000001413, 3.79549453752, 21228.3920235458],
    [0.00000001251, 5.05679622065, 16200.7727245012],
    [0.00000001191, 3.44560921792, 536.8045120954],
    [0.00000001105, 5.31966001019, 23.8784377478],
    [0.00000001072, 5.53673468069, 11371.7046897582],
    [0.00000001082, 0.65010284352, 10973.55568635],
    [0.00000001019, 1.45708941546, 4164.311989613],
    [0.00000000962, 0.81771017882, 3.881335358],
    [0.00000001048, 2.02219474367, 10969.9652576982],
    [0.00000001214, 0.21577666103, 7632.9432596502],
    [0.00000000894, 2.46052602734, 1990.745017041],
    [0.00000000973, 5.218631679, 25158.6017197654],
    [0.00000000849, 2.48172332389, 10984.1923516998],
    [0.00000000813, 1.18977366976, 3894.1818295422],
    [0.00000000943, 2.22414400881, 7084.8967811152],
    [0.00000000758, 1.30035382009, 103.0927742186],
    [0.00000000765, 3.36312388424, 36.0278666774],
    [0.00000000915, 5.41544768604, 206.1855484372],
    [0.00000000872, 3.45652982048, 9917.6968745098],
    [0.0000000074, 0.36385053892, 22483.84857449259],
    [0.00000000715, 2.30778107403, 1589.0728952838],
    [0.00000000771, 3.98543060945, 955.5997416086],
    [0.00000000698, 1.61867096092, 7234.794256242],
    [0.00000000682, 2.48483876863, 13916.0191096416],
    [0.00000000728, 5.20962563787, 38.0276726358],
    [0.00000000685, 2.77592961854, 20.7753954924],
    [0.00000000676, 2.24198669815, 16496.3613962024],
    [0.00000000636, 4.28242193632, 28.4491874678],
    [0.00000000623, 1.08893092759, 14314.1681130498],
    [0.00000000682, 0.35831526164, 29088.811415985],
    [0.00000000685, 0.38876148682, 15.252471185],
    [0.00000000628, 5.73133429252, 8635.9420037632],
    [0.00000000686, 3.20258936313, 17267.26820169119],
    [0.00000000695, 3.68341297435, 17253.04110768959],
    [0.00000000589, 0.73423534216, 419.4846438752],
    [0.00000000557, 0.68701139508, 11712.9553182308],
    [0.00000000691, 0.85822542524, 11506.7697697936],
    [0.00000000743, 2.05063743222, 10575.4066829418],
    [0.00000000486, 6.09362327324, 5216.5803728014],
    [0.0000000051, 3.64455627841, 20426.571092422],
    [0.00000000479, 0.81018114791, 12566.1516999828],
    [0.00000000483, 1.78094334803, 33019.0211122046],
    [0.00000000424, 2.77580041556, 23543.23050468179],
    [0.00000000441, 4.31902284603, 16858.4825329332],
    [0.00000000433, 3.45309349912, 10177.2576795336],
    [0.0000000054, 1.29191197207, 640.8776073822],
    [0.00000000423, 5.07007353132, 24356.7807886416],
    [0.0000000039, 3.19615612699, 6812.766815086],
    [0.00000000439, 1.42666718161, 5746.271337896],
    [0.00000000407, 5.21196455914, 220.4126424388],
    [0.00000000369, 2.92394595319, 17256.6315363414],
    [0.00000000371, 3.02280345962, 6836.6452528338],
    [0.00000000492, 3.88523568217, 13517.8701062334],
    [0.00000000447, 3.66884293079, 4705.7323075436],
    [0.00000000402, 0.92726108685, 5760.4984318976],
    [0.00000000374, 5.01577520608, 7.046236698],
    [0.00000000383, 5.13738767737, 12132.439962106],
    [0.0000000034, 3.51522752862, 7342.4577801806],
    [0.00000000347, 5.39110909776, 3738.761430108],
    [0.00000000443, 2.59559181493, 3496.032826134],
    [0.00000000448, 3.46404849508, 11015.1064773348],
    [0.00000000359, 6.22679790282, 245.8316462294],
    [0.00000000331, 0.20932806623, 28286.9904848612],
    [0.0000000035, 4.65270529679, 12146.6670561076],
    [0.00000000345, 3.20334574498, 36949.2308084242],
    [0.0000000031, 5.72178649382, 10213.285546211],
    [0.00000000307, 2.35299010924, 170.6728706192],
    [0.00000000317, 0.99242371954, 6681.2248533996],
    [0.00000000296, 5.28749506307, 13119.72110282519],
    [0.00000000285, 3.59030684195, 12352.8526045448],
    [0.00000000283, 2.22384846458, 5856.4776591154],
    [0.00000000288, 6.15261767194, 19800.9459562248],
    [0.00000000296, 6.21318017059, 21954.15760939799],
    [0.00000000331, 2.8650825653, 3930.2096962196],
    [0.0000000026, 3.08989658222, 5643.1785636774],
    [0.00000000337, 5.71941155323, 16460.33352952499],
    [0.00000000256, 1.63095171747, 32217.2001810808],
    [0.00000000246, 3.06167552332, 110.2063212194],
    [0.00000000261, 3.17694704074, 16723.350142595],
    [0.0000000024, 4.00207498591, 3097.88382272579],
    [0.0000000023, 4.8567483924, 9779.1086761254],
    [0.00000000283, 2.00214428467, 17260.1546546904],
    [0.00000000248, 4.62554556794, 40879.4405046438],
    [0.00000000268, 4.70886753471, 14945.3161735544],
    [0.00000000253, 2.60016353327, 45892.73043315699],
    [0.00000000221, 4.75852874779, 20199.094959633],
    [0.00000000217, 0.79990212029, 17996.0311682222],
    [0.00000000261, 3.13446070388, 4732.0306273434],
    [0.00000000207, 3.07724246401, 11.729352836],
    [0.00000000286, 5.88776697069, 22003.9146348698],
    [0.00000000247, 4.62134212731, 15671.0817594066],
    [0.0000000021, 0.8384723749, 16062.1845261168],
    [0.00000000283, 1.01194885735, 25934.1243310894],
    [0.00000000204, 2.34615348695, 266.6070417218],
    [0.00000000222, 3.00956143684, 5753.3848848968],
    [0.00000000265, 1.05104064647, 2388.8940204492],
    [0.000000002, 3.43813060336, 16737.5772365966],
    [0.00000000195, 3.05347188836, 36147.4098773004],
    [0.00000000194, 1.51161229798, 10440.2742926036],
    [0.00000000188, 1.70240394827, 22743.4093795164],
    [0.00000000178, 3.55339673652, 7860.4193924392],
    [0.0000000025, 2.43140076023, 29864.334027309],
    [0.00000000233, 1.26992342528, 19402.7969528166],
    [0.0000000017, 0.9549738399, 3634.6210245184],
    [0.00000000214, 4.53397170749, 18073.7049386502],
    [0.00000000181, 5.9753016672, 18875.525869774],
    [0.00000000168, 2.17671416605, 27.4015560968],
    [0.00000000179, 6.04756548889, 44809.6502008634],
    [0.0000000016, 0.40769346502, 12721.572099417],
    [0.00000000153, 4.60483062839, 11087.2851259184],
    [0.00000000152, 3.3129899509, 639.897286314],
    [0.00000000209, 3.85532913445, 33794.5437235286],
    [0.00000000149, 5.50605494692, 4686.8894077068],
    [0.00000000179, 3.58450811616, 87.30820453981],
    [0.00000000152, 2.67225310468, 19004.6479494084],
    [0.0000000016, 4.31350768554, 14143.4952424306],
    [0.00000000155, 2.36206963644, 10454.5013866052],
    [0.00000000144, 1.51796296762, 28237.2334593894],
    [0.00000000147, 4.47654841913, 40077.61957352],
    [0.00000000148, 2.85812659517, 9623.6882766912],
    [0.00000000188, 4.42778896401, 6438.4962494256],
    [0.00000000164, 5.46962634306, 5230.807466803],
    [0.00000000143, 5.23412892489, 13521.7514415914],
    [0.00000000132, 0.30941861692, 23141.5583829246],
    [0.00000000131, 5.40911677602, 2699.7348193176],
    [0.00000000175, 5.59909103869, 11933.3679606696],
    [0.00000000136, 5.97960068553, 11919.140866668],
    [0.00000000139, 4.33975815871, 23020.65308658799],
    [0.0000000013, 0.98502535419, 22805.7355659936],
    [0.00000000125, 4.66905055006, 15110.4661198662],
    [0.00000000122, 1.75025808057, 17782.7320727842],
    [0.00000000128, 4.72841587934, 11790.6290886588],
    [0.0000000017, 5.28133585455, 37724.7534197482],
    [0.0000000014, 4.81695576421, 23006.42599258639],
    [0.00000000143, 2.99637641707, 1551.045222648],
    [0.00000000118, 4.20001463414, 11403.676995575],
    [0.00000000123, 3.53471054692, 25685.872802808],
    [0.00000000162, 3.10309808003, 22345.2603761082],
    [0.00000000129, 1.1862431735, 48739.859897083],
    [0.00000000117, 2.24175268912, 15664.03552270859],
    [0.00000000119, 5.64397627824, 71980.63357473118],
    [0.00000000144, 2.54869747042, 227.476132789],
    [0.00000000131, 2.56654592141, 1052.2683831884],
    [0.0000000015, 4.50728547711, 2379.1644735716],
    [0.0000000011, 4.50561404411, 21947.1113727],
    [0.00000000122, 4.23040027813, 29.429508536],
    [0.00000000107, 0.22488459325, 18052.9295431578],
    [0.0000000011, 5.89998709969, 44007.8292697396],
    [0.00000000107, 2.80505742907, 12168.0026965746],
    [0.00000000106, 1.96122681089, 74.7815985673],
    [0.00000000099, 3.56417337974, 735.8765135318],
    [0.00000000135, 0.4252397931, 41654.9631159678],
    [0.00000000123, 5.87214393888, 7079.3738568078],
    [0.00000000097, 2.30259516519, 26735.9452622132],
    [0.00000000097, 1.65579893894, 533.2140834436],
    [0.00000000113, 0.65424115589, 4136.9104335162],
    [0.0000000009, 0.60614080206, 12029.3471878874],
    [0.00000000093, 5.83353350546, 6040.3472460174],
    [0.00000000104, 4.46368215741, 8662.240323563],
    [0.00000000091, 1.27885034769, 7238.6755916],
    [0.00000000098, 4.47130143807, 7058.5984613154],
    [0.00000000087, 3.9366113744, 29296.6153895786],
    [0.00000000118, 3.01327215936, 9388.0059094152],
    [0.00000000087, 4.07557239869, 18606.4989460002],
    [0.00000000116, 6.26122792995, 9380.9596727172],
    [0.00000000088, 5.96980472191, 107.6635239386],
    [0.00000000094, 5.97952227329, 15720.8387848784],
    [0.00000000094, 2.6079437629, 52670.0695933026],
    [0.00000000083, 0.44659235998, 11609.8625440122],
    [0.00000000112, 4.93571599731, 25287.7237993998],
    [0.00000000081, 2.05680883408, 20995.3929664494],
    [0.0000000008, 0.0553747242, 24889.5747959916],
    [0.00000000082, 1.0404898279, 47938.0389659592],
    [0.0000000008, 5.92408280165, 2787.0430238574],
    [0.00000000078, 2.14284792899, 26084.0218062162],
    [0.00000000079, 5.36628071903, 28628.3362260996],
    [0.00000000076, 5.67183650604, 14.2270940016],
    [0.00000000081, 6.16619660848, 1039.0266107904],
    [0.00000000076, 3.21449884756, 111.1866422876],
    [0.00000000082, 2.78413773262, 2118.7638603784],
    [0.00000000105, 1.85291736971, 45585.1728121874],
    [0.00000000089, 4.08836707249, 3128.3887650958],
    [0.00000000086, 5.79828324983, 10988.808157535],
    [0.00000000073, 3.64065433839, 30666.1549584328],
    [0.00000000081, 4.07325773485, 1066.49547719],
    [0.0000000009, 3.22721419415, 12139.5535091068],
    [0.00000000069, 1.93625656075, 135.62532501],
    [0.00000000068, 2.2962391028, 26087.9031415742],
    [0.00000000084, 3.1516381975, 23013.5395395872],
    [0.00000000066, 5.90906599017, 21548.9623692918],
    [0.00000000074, 0.9105830271, 14919.0178537546],
    [0.00000000069, 1.08373548718, 27707.5424942948],
    [0.00000000067, 5.58582971373, 4535.0594369244],
    [0.00000000062, 4.465425153, 9225.539273283],
    [0.0000000007, 3.8247524671, 22779.4372461938],
    [0.00000000067, 5.9172833913, 4701.1165017084],
    [0.00000000068, 4.02950881006, 56600.2792895222],
    [0.00000000059, 5.38281843911, 18319.5365848796],
    [0.00000000073, 0.98816683958, 19651.048481098],
    [0.00000000081, 1.81190226733, 12323.4230960088],
    [0.00000000082, 3.28093064566, 49515.382508407],
    [0.00000000065, 3.34580407184, 51.28033786241],
    [0.00000000061, 2.46432498733, 51868.2486621788],
    [0.00000000063, 4.33595897706, 22476.73502749179],
    [0.00000000058, 3.88479568442, 23937.856389741],
    [0.00000000069, 5.78140218377, 21424.4666443034],
    [0.0000000007, 3.25825064778, 2942.4634232916],
    [0.00000000058, 1.88786649003, 27832.0382192832],
    [0.00000000056, 4.99491811597, 34596.3646546524],
    [0.00000000077, 0.48457703987, 28230.18722269139],
    [0.00000000073, 0.53298688753, 2301.58581590939],
    [0.00000000067, 2.53852336668, 377.3736079158],
    [0.00000000055, 3.81917474843, 5429.8794682394],
    [0.00000000056, 1.38331652158, 8982.810669309],
    [0.00000000072, 1.3946002389, 10021.8372800994],
    [0.00000000056, 2.71305389525, 16193.65917750039],
    [0.00000000053, 3.61529270216, 77.673770428],
    [0.00000000058, 5.80636501152, 12592.4500197826],
    [0.00000000051, 3.32803972907, 56.8983749356],
    [0.00000000058, 3.13638677202, 309.2783226558],
    [0.00000000051, 0.91386154356, 31570.7996493912],
    [0.00000000049, 1.45908937448, 24491.4257925834],
    [0.00000000049, 4.86525539101, 10344.2950653858],
    [0.0000000005, 5.7438291744, 19.66976089979],
    [0.00000000051, 3.89820431668, 7872.1487452752],
    [0.00000000046, 3.45375940424, 4590.910180489],
    [0.00000000063, 4.70914613549, 53445.5922046266],
    [0.00000000049, 4.44780563257, 22490.9621214934],
    [0.00000000047, 1.44793892652, 17796.9591667858],
    [0.00000000046, 3.97546621352, 29026.48522950779],
    [0.00000000045, 4.31955386621, 433.7117378768],
    [0.00000000045, 0.6731511333, 1162.4747044078],
    [0.0000000005, 3.32153685342, 11300.5842213564],
    [0.00000000045, 0.9567353308, 5642.1982426092],
    [0.0000000005, 5.45094569739, 60530.4889857418],
    [0.00000000061, 3.64587034252, 15265.8865193004],
    [0.00000000043, 0.07854475422, 38526.574350872],
    [0.00000000043, 2.41355110121, 98068.53671630539],
    [0.00000000046, 0.26142733448, 11.0457002639],
    [0.00000000057, 2.31075524252, 23581.2581773176],
    [0.00000000044, 3.31510538835, 16207.886271502],
    [0.00000000045, 3.88828039777, 55798.4583583984],
    [0.00000000043, 1.94164654208, 1903.4368125012],
    [0.00000000042, 3.71984706703, 30774.5016425748],
    [0.0000000004, 4.50007522155, 7477.522860216],
    [0.0000000004, 5.7095390796, 26880.3198130326],
    [0.00000000053, 2.31602404303, 31172.650645983],
    [0.0000000004, 3.21682043639, 11925.2740926006],
    [0.00000000039, 1.95352580455, 10770.8932562618],
    [0.00000000039, 4.61184303844, 95.9792272178],
    [0.00000000038, 6.2773944545, 11080.1715789176],
    [0.00000000043, 1.14078465002, 49.7570254718],
    [0.00000000037, 1.29390383811, 310.8407988684],
    [0.00000000038, 0.9597092595, 664.75604513],
    [0.00000000042, 5.53347635327, 18216.443810661],
    [0.00000000042, 6.01754503356, 18202.21671665939],
    [0.00000000037, 3.29185729075, 27433.88921587499],
    [0.00000000037, 5.51214360399, 12043.574281889],
    [0.00000000048, 6.13744492783, 57375.8019008462],
    [0.00000000037, 0.87176889717, 16522.6597160022],
];

const L2: &[Term] = &[
    [0.00000991013, PI, 0.0],
    [0.00000027348, 0.05276844178, 3.523118349],
    [0.00000016337, 5.18822233349, 26.2983197998],
    [0.00000015751, 3.68477036547, 155.4203994342],
    [0.00000006792, 0.8288370342, 775.522611324],
    [0.0000000463, 4.659434484, 1577.3435424478],
    [0.00000004061, 1.03063238979, 7.1135470008],
    [0.00000003473, 5.14152275985, 796.2980068164],
    [0.00000003021, 1.19274596785, 242.728603974],
    [0.00000002858, 6.11660061719, 529.6909650946],
    [0.00000002714, 0.30467442666, 398.1490034082],
    [0.00000002536, 2.28007168572, 553.5694028424],
    [0.00000002078, 3.75435095487, 0.9803210682],
    [0.00000001649, 0.87695745106, 951.7184062506],
    [0.00000001444, 5.75937027713, 1349.8674096588],
    [0.00000001066, 2.97193809855, 2146.1654164752],
    [0.00000001326, 4.36228000127, 1748.016413067],
    [0.00000001323, 3.74789813676, 1194.4470102246],
    [0.00000000849, 5.60661424924, 10977.078804699],
    [0.00000000829, 3.31023480096, 213.299095438],
    [0.00000000715, 4.37633551116, 5223.6939198022],
    [0.00000000617, 6.08093552653, 5507.5532386674],
    [0.00000000742, 0.59358726683, 3154.6870848956],
    [0.00000000527, 1.59876879192, 2544.3144198834],
    [0.00000000645, 1.98073361897, 801.8209311238],
    [0.00000000489, 2.34703904345, 1592.5960136328],
    [0.0000000031, 5.06268601323, 10447.3878396044],
    [0.00000000294, 0.58896228948, 1059.3819301892],
    [0.00000000318, 3.40604954564, 4694.0029547076],
    [0.00000000287, 4.80765280941, 5088.6288397668],
    [0.00000000271, 1.22254362289, 9437.762934887],
    [0.0000000024, 1.18527974102, 6283.0758499914],
    [0.00000000228, 1.30878574969, 4292.3308329504],
    [0.00000000288, 6.19639144171, 4690.4798363586],
    [0.00000000221, 3.37188342814, 2352.8661537718],
    [0.00000000177, 0.9428167959, 1990.745017041],
    [0.00000000161, 0.46537341783, 16730.4636895958],
    [0.00000000162, 3.43807587022, 5486.777843175],
    [0.00000000161, 2.70799951605, 3894.1818295422],
    [0.00000000149, 2.40797213364, 426.598190876],
    [0.00000000155, 2.64734140166, 13367.9726311066],
    [0.00000000198, 2.05005030106, 7084.8967811152],
    [0.00000000196, 6.06877865006, 640.8776073822],
    [0.00000000144, 0.36091323946, 8031.0922630584],
    [0.00000000166, 5.42530005413, 11506.7697697936],
    [0.0000000011, 3.14355707869, 7234.794256242],
    [0.00000000143, 1.74870606715, 7632.9432596502],
    [0.00000000098, 4.07165238106, 17298.1823273262],
    [0.00000000091, 1.58956864816, 11926.2544136688],
    [0.00000000102, 2.05853060226, 87.30820453981],
    [0.00000000085, 2.19727554171, 10973.55568635],
    [0.0000000008, 5.2377807036, 12036.4607348882],
    [0.00000000106, 4.10978680787, 3496.032826134],
    [0.00000000078, 5.27909324318, 8429.2412664666],
    [0.00000000074, 6.21872909882, 16200.7727245012],
    [0.00000000097, 3.51101924359, 11015.1064773348],
    [0.00000000071, 0.19409531154, 17789.845619785],
    [0.00000000073, 4.54202565598, 6836.6452528338],
    [0.00000000081, 2.74014347034, 4164.311989613],
    [0.00000000068, 4.97891542807, 10177.2576795336],
    [0.00000000067, 4.56373075686, 9917.6968745098],
    [0.00000000088, 3.58450991839, 10575.4066829418],
    [0.00000000067, 5.51240651277, 3097.88382272579],
    [0.00000000065, 5.49541212849, 21228.3920235458],
    [0.00000000064, 0.85186317964, 8635.9420037632],
    [0.00000000062, 3.75098613376, 16496.3613962024],
    [0.00000000063, 2.30485276356, 12566.1516999828],
    [0.00000000054, 4.03344010015, 13916.0191096416],
    [0.0000000005, 5.23986671065, 3340.6124266998],
    [0.00000000063, 5.82037228507, 2388.8940204492],
    [0.00000000047, 0.53096907913, 13119.72110282519],
    [0.00000000057, 4.97077155753, 14945.3161735544],
    [0.00000000047, 5.1860688974, 20426.571092422],
    [0.00000000044, 2.52677225361, 11712.9553182308],
    [0.00000000058, 5.41997950305, 13517.8701062334],
    [0.00000000046, 0.09391281217, 9779.1086761254],
    [0.00000000043, 0.83631205493, 11371.7046897582],
    [0.00000000042, 0.63481258912, 2699.7348193176],
    [0.00000000041, 0.65439000362, 25158.6017197654],
    [0.00000000038, 0.33673983694, 24356.7807886416],
];

const L3: &[Term] = &[
    [0.00000002962, 5.1956408732, 155.4203994342],
    [0.00000002537, PI, 0.0],
    [0.00000001288, 4.72177304571, 3.523118349],
    [0.00000000635, 5.96904899168, 242.728603974],
    [0.00000000402, 3.78606612895, 553.5694028424],
];

const L4: &[Term] = &[
    [0.0000000042, 0.41892851415, 155.4203994342],
    [0.00000000041, 3.14032562331, 3.523118349],
];

const L5: &[Term] = &[
    [0.0000000005, 2.01352986713, 155.4203994342],
];

const K0: &[Term] = &[
    [0.0037408165, PI, 0.0],
    [0.00001988852, 4.23374621009, 1577.3435424478],
    [0.00001859231, 0.55463591479, 5223.6939198022],
    [0.00001497439, 3.72409379834, 529.6909650946],
    [0.00000823038, 0.33112005725, 2352.8661537718],
    [0.00000483421, 3.17751155482, 10213.285546211],
    [0.00000483174, 5.65660621901, 5507.5532386674],
    [0.00000441134, 1.21138303352, 398.1490034082],
    [0.00000354179, 0.13054037265, 4694.0029547076],
    [0.00000278456, 5.27885763953, 1059.3819301892],
    [0.00000294442, 3.92692187453, 775.522611324],
    [0.00000229665, 0.79626727662, 9437.762934887],
    [0.00000211663, 1.69085049749, 10977.078804699],
    [0.00000178132, 4.06312103648, 17789.845619785],
    [0.00000095668, 6.10260944466, 796.2980068164],
    [0.00000128829, 2.21903872695, 13367.9726311066],
    [0.00000096199, 4.0109024308, 213.299095438],
    [0.00000079084, 0.00566665201, 5856.4776591154],
    [0.00000077808, 3.64174224007, 17298.1823273262],
    [0.00000074517, 1.76395145858, 6283.0758499914],
    [0.00000071832, 0.64118659399, 3154.6870848956],
    [0.00000066753, 4.20078421387, 5753.3848848968],
    [0.00000054305, 1.2789823322, 10447.3878396044],
    [0.00000047317, 5.98541885945, 4164.311989613],
    [0.0000005385, 3.75922237603, 2544.3144198834],
    [0.00000041341, 5.15630887259, 7.1135470008],
    [0.00000048964, 5.06438171801, 21228.3920235458],
    [0.00000038553, 1.6299289334, 801.8209311238],
    [0.0000003352, 5.14670482356, 2146.1654164752],
    [0.00000044839, 5.35602472529, 4705.7323075436],
    [0.00000030006, 5.8204502386, 1589.0728952838],
    [0.00000039353, 4.40875564745, 26087.9031415742],
    [0.00000025552, 4.70498282243, 1194.4470102246],
    [0.00000034288, 2.87629134458, 16730.4636895958],
    [0.0000003223, 5.19482255479, 23543.23050468179],
    [0.0000003162, 0.20377436978, 25158.6017197654],
    [0.00000029988, 2.06647143238, 7084.8967811152],
    [0.00000022914, 0.26684134231, 11506.7697697936],
    [0.00000028371, 3.55121155276, 17260.1546546904],
    [0.00000024525, 5.33410545785, 6812.766815086],
    [0.000000224, 6.18159425612, 426.598190876],
    [0.00000018808, 1.65360362287, 3738.761430108],
    [0.00000017863, 0.26479139813, 1748.016413067],
    [0.00000016727, 5.32163043011, 26.2983197998],
    [0.00000020783, 1.62629258894, 29088.811415985],
    [0.00000019032, 3.07717685025, 3930.2096962196],
    [0.00000018419, 5.55814968279, 5486.777843175],
    [0.00000018697, 0.89438266755, 13521.7514415914],
    [0.0000001798, 3.02828450256, 3340.6124266998],
    [0.00000017383, 3.49102971235, 11015.1064773348],
    [0.00000012241, 0.68301850852, 5088.6288397668],
    [0.00000015652, 0.75677278647, 5643.1785636774],
    [0.00000015213, 0.56985565245, 8635.9420037632],
    [0.00000014789, 2.84922701747, 18073.7049386502],
    [0.00000014393, 4.2764015926, 22003.9146348698],
    [0.00000013642, 6.00388395797, 12036.4607348882],
    [0.00000013834, 3.0487524287, 33019.0211122046],
    [0.00000010346, 2.96548563796, 3128.3887650958],
    [0.00000010485, 2.4428522696, 16200.7727245012],
    [0.00000011665, 5.69855413828, 25934.1243310894],
    [0.00000010374, 0.42204428363, 5230.807466803],
    [0.00000010593, 3.78906764969, 5216.5803728014],
    [0.00000011214, 4.91512650529, 14945.3161735544],
    [0.0000000885, 0.85735777525, 9917.6968745098],
    [0.00000009429, 1.66843094483, 1349.8674096588],
    [0.00000007963, 1.17522727831, 52175.8062831484],
    [0.00000009297, 4.47115496366, 36949.2308084242],
    [0.00000008844, 0.83625571936, 29864.334027309],
    [0.00000008447, 1.06163760227, 8429.2412664666],
    [0.00000006441, 0.25331823447, 4136.9104335162],
    [0.00000006339, 2.49567231737, 8031.0922630584],
    [0.00000006299, 2.0892083299, 4690.4798363586],
    [0.00000008297, 3.51264577993, 18422.62935909819],
    [0.00000007403, 4.7107553649, 23013.5395395872],
    [0.00000007598, 0.05572271846, 18875.525869774],
    [0.00000007446, 3.30242876494, 1592.5960136328],
    [0.00000005472, 5.55412164007, 3634.6210245184],
    [0.00000006081, 3.07880786015, 4732.0306273434],
    [0.00000005289, 3.07331745335, 951.7184062506],
    [0.00000004781, 2.95678402973, 955.5997416086],
    [0.00000006498, 2.25653898617, 33794.5437235286],
    [0.00000004739, 4.39334857882, 2942.4634232916],
    [0.00000004611, 3.67855085148, 24072.9214697764],
    [0.00000004465, 0.55652742216, 7860.4193924392],
    [0.00000006294, 5.89350110582, 40879.4405046438],
    [0.00000006063, 4.04895816524, 22483.84857449259],
    [0.0000000575, 0.04561508156, 29296.6153895786],
    [0.00000004666, 4.42336639384, 7058.5984613154],
    [0.00000005286, 1.47927631912, 22805.7355659936],
    [0.00000004248, 1.22058351301, 18319.5365848796],
    [0.00000005216, 0.88886576578, 11926.2544136688],
    [0.00000004823, 5.88544271733, 155.4203994342],
    [0.00000003674, 3.58989688453, 6681.2248533996],
    [0.00000003635, 4.30120473819, 10973.55568635],
    [0.00000004571, 1.3574362129, 14143.4952424306],
    [0.00000004245, 0.43954994331, 536.8045120954],
    [0.00000004254, 0.54107269293, 7238.6755916],
    [0.00000003534, 4.47898840027, 553.5694028424],
    [0.00000004696, 3.67645105718, 37724.7534197482],
    [0.0000000402, 1.70026746262, 12566.1516999828],
    [0.00000004304, 2.8277707945, 11371.7046897582],
    [0.00000003456, 3.90988714065, 7632.9432596502],
    [0.00000003332, 4.18174331822, 20426.571092422],
    [0.00000004059, 3.8579735299, 522.5774180938],
    [0.0000000442, 5.12393027283, 103.0927742186],
    [0.00000003138, 0.95155546555, 4701.1165017084],
    [0.00000004286, 1.03260631515, 44809.6502008634],
    [0.00000004053, 1.14006806984, 4590.910180489],
    [0.00000003223, 5.4728828591, 639.897286314],
    [0.00000003255, 3.95624124487, 39609.6545831656],
    [0.00000003735, 2.90265737736, 26735.9452622132],
    [0.00000003372, 2.54891063937, 11790.6290886588],
    [0.00000003024, 3.39202036171, 4686.8894077068],
    [0.00000002761, 2.09018492652, 7079.3738568078],
    [0.00000002927, 5.88738551899, 10988.808157535],
    [0.00000002616, 6.27723142758, 2118.7638603784],
    [0.00000003548, 4.07823814175, 15720.8387848784],
    [0.00000003021, 4.523964264, 8662.240323563],
    [0.0000000336, 5.09609409477, 41654.9631159678],
    [0.00000003206, 5.54605202768, 19651.048481098],
    [0.00000002464, 0.35894366581, 1551.045222648],
    [0.00000002282, 1.89813485388, 1990.745017041],
    [0.00000002968, 3.49527506853, 4292.3308329504],
    [0.00000002994, 5.43830470121, 12168.0026965746],
    [0.00000002175, 6.09928144214, 13916.0191096416],
    [0.00000002932, 2.45484183372, 48739.859897083],
    [0.00000002129, 5.72677279241, 10575.4066829418],
    [0.00000002706, 0.71048768724, 23581.2581773176],
    [0.00000002317, 4.57259132444, 14314.1681130498],
    [0.00000002665, 4.32590285509, 30666.1549584328],
    [0.00000002554, 2.40111449041, 74.7815985673],
    [0.00000002315, 0.66850714203, 5884.9268465832],
    [0.00000002036, 2.01796165421, 15671.0817594066],
    [0.00000001971, 1.09360164739, 14919.0178537546],
    [0.00000001862, 0.99166279497, 3.523118349],
    [0.00000002391, 0.23233428087, 45585.1728121874],
    [0.0000000212, 3.6017346717, 21954.15760939799],
    [0.00000001823, 4.226172726, 78263.70942472259],
    [0.00000002132, 1.52336953125, 5429.8794682394],
    [0.00000002221, 5.13417423737, 4535.0594369244],
    [0.000000022, 2.14884918487, 27511.4678735372],
    [0.00000002185, 0.98875200624, 15110.4661198662],
    [0.00000001558, 2.03208873459, 1066.49547719],
    [0.00000002129, 0.42104672533, 9225.539273283],
    [0.00000001632, 2.56319005941, 18849.2275499742],
    [0.00000001854, 5.96605954512, 12592.4500197826],
    [0.00000001792, 1.56231244969, 10984.1923516998],
    [0.00000002014, 3.87702295243, 52670.0695933026],
    [0.0000000181, 4.94027105683, 10969.9652576982],
    [0.00000001913, 5.74903822364, 34596.3646546524],
    [0.00000001381, 5.32951303691, 9623.6882766912],
    [0.00000001729, 5.86283837771, 28766.924424484],
    [0.00000001328, 1.60637316798, 16858.4825329332],
    [0.00000001494, 4.22768678613, 2379.1644735716],
    [0.00000001371, 1.2565755213, 13517.8701062334],
    [0.00000001747, 3.58214751673, 31441.6775697568],
    [0.00000001464, 5.78643918825, 7342.4577801806],
    [0.00000001346, 4.90152287441, 3894.1818295422],
    [0.00000001284, 2.98771661503, 4804.209275927],
    [0.00000001694, 1.65157069898, 49515.382508407],
    [0.00000001562, 2.98818373048, 149.5631971346],
    [0.00000001669, 5.31971473902, 7234.794256242],
    [0.00000001296, 0.01358298134, 17256.6315363414],
    [0.00000001352, 5.9988898727, 11769.8536931664],
    [0.00000001533, 4.2673443628, 18209.33026366019],
    [0.00000001168, 0.43169413713, 9388.0059094152],
    [0.00000001134, 4.78216097039, 29826.3063546732],
    [0.00000001182, 2.13295829919, 242.728603974],
    [0.00000001264, 1.90538825542, 5120.6011455836],
    [0.00000001417, 1.63655282707, 11712.9553182308],
    [0.00000001426, 2.83085443402, 18052.9295431578],
    [0.00000001365, 5.01235443249, 35371.8872659764],
    [0.00000001033, 3.85773157387, 20.7753954924],
    [0.0000000138, 0.88889648462, 38526.574350872],
    [0.00000001423, 3.92882395123, 8827.3902698748],
    [0.00000001412, 3.35717443888, 6133.5126528568],
    [0.00000001105, 1.64891354396, 14712.317116458],
    [0.00000001241, 1.12243640665, 16522.6597160022],
    [0.00000001388, 5.29915013032, 56600.2792895222],
    [0.00000001293, 4.14977390025, 6496.3749454294],
    [0.00000000943, 6.14788565496, 110.2063212194],
    [0.00000001137, 0.129204932, 5849.3641121146],
    [0.00000001039, 1.16257387485, 17782.7320727842],
    [0.00000001176, 3.27363459421, 1162.4747044078],
    [0.00000001085, 0.68120113636, 4061.2192153944],
    [0.00000001198, 3.07063471417, 53445.5922046266],
    [0.00000001025, 2.92241170764, 5863.5912061162],
    [0.0000000119, 4.00156368689, 4907.3020501456],
    [0.00000000877, 4.46615489963, 5650.2921106782],
    [0.000000009, 3.06552972602, 16460.33352952499],
    [0.00000000951, 3.686645381, 16496.3613962024],
    [0.00000001147, 5.22353578157, 28237.2334593894],
    [0.00000001039, 2.39518951382, 5326.7866940208],
    [0.00000000884, 3.99292311547, 22779.4372461938],
    [0.00000000972, 2.53278101783, 76.2660712756],
    [0.00000000819, 3.38855168536, 19800.9459562248],
    [0.00000001113, 0.37752614169, 33326.5787331742],
    [0.00000000991, 3.94070696546, 17796.9591667858],
    [0.00000001054, 0.15733869779, 39302.096962196],
    [0.00000001024, 1.17320780217, 35050.00027447539],
    [0.00000001075, 0.8585507842, 10177.2576795336],
    [0.00000000832, 3.53574779125, 17654.7805397496],
    [0.00000001005, 0.68501709634, 7477.522860216],
    [0.00000000998, 2.31186169116, 42456.7840470916],
    [0.00000000768, 3.72961113875, 4933.2084403326],
    [0.00000000758, 0.44487232731, 6836.6452528338],
    [0.00000000722, 0.49278066155, 2388.8940204492],
    [0.00000000749, 1.72017088936, 20199.094959633],
    [0.0000000097, 2.15437801485, 38.1330356378],
    [0.00000000745, 0.68554183573, 65697.55772473979],
    [0.00000000739, 2.19248794752, 632.7837393132],
    [0.00000000868, 2.55989410494, 20452.8694122218],
    [0.00000000959, 0.43803857076, 60530.4889857418],
    [0.00000000783, 2.19377813544, 6069.7767545534],
    [0.00000000694, 5.38068734713, 1052.2683831884],
    [0.00000000892, 1.82977948102, 245.8316462294],
    [0.00000000882, 4.67674335225, 20995.3929664494],
    [0.00000000672, 4.04228193792, 10021.8372800994],
    [0.00000000767, 0.7804559334, 4171.4255366138],
    [0.00000000846, 4.48953649533, 57375.8019008462],
    [0.00000000701, 1.79363650705, 5481.2549188676],
    [0.0000000081, 0.26757874704, 12139.5535091068],
    [0.00000000862, 5.50166935676, 149144.46708624958],
    [0.00000000806, 1.58408768466, 43232.3066584156],
    [0.00000000757, 0.69902663274, 206.1855484372],
    [0.00000000848, 4.38409519253, 24492.40611365159],
    [0.00000000605, 1.94866348746, 4274.5183108324],
    [0.000000006, 0.02482189622, 3496.032826134],
    [0.00000000589, 1.86425991369, 10454.5013866052],
    [0.0000000059, 5.1206944711, 3104.9300594238],
    [0.00000000595, 4.8702940192, 19402.7969528166],
    [0.00000000595, 5.40138671369, 20597.2439630412],
    [0.00000000586, 5.42986527959, 26709.6469424134],
    [0.00000000612, 4.5377912698, 10440.2742926036],
    [0.00000000648, 3.85625628712, 220.4126424388],
    [0.00000000723, 3.73475860333, 46386.9937433112],
    [0.00000000729, 2.67811490754, 13119.72110282519],
    [0.00000000535, 2.96538769042, 4157.1984426122],
    [0.00000000509, 5.16244695831, 22743.4093795164],
    [0.00000000549, 3.05197072995, 27043.5028831828],
    [0.00000000623, 3.9955926447, 24383.0791084414],
    [0.00000000503, 2.26971945271, 9779.1086761254],
    [0.00000000664, 1.86005909746, 64460.6986819614],
    [0.00000000546, 3.96689248919, 19804.8272915828],
    [0.00000000612, 3.00980206813, 47162.5163546352],
    [0.00000000524, 5.66638617267, 6309.3741697912],
    [0.0000000062, 2.28395510487, 10344.2950653858],
    [0.00000000596, 5.90828207964, 61306.0115970658],
    [0.00000000446, 3.41504921626, 23141.5583829246],
    [0.00000000439, 1.84086538452, 5746.271337896],
    [0.00000000439, 0.99334619037, 104351.61256629678],
    [0.00000000477, 3.17446952432, 21424.4666443034],
    [0.00000000445, 1.27769034211, 949.1756089698],
    [0.00000000526, 0.24402527707, 23937.856389741],
    [0.0000000041, 0.97204966373, 23539.7073863328],
    [0.00000000525, 5.15759513327, 50317.2034395308],
    [0.00000000379, 2.87445340052, 11499.6562227928],
    [0.00000000408, 3.23427833718, 9411.4646150872],
    [0.00000000394, 0.38751839384, 22345.2603761082],
    [0.00000000439, 4.76192221582, 27707.5424942948],
    [0.00000000505, 4.49516367081, 16062.1845261168],
    [0.00000000463, 4.43473576047, 51092.7260508548],
    [0.00000000454, 5.42981074667, 28313.288804661],
    [0.00000000347, 4.60712012571, 1692.1656695024],
    [0.00000000362, 5.5625701991, 7875.6718636242],
    [0.00000000354, 4.09285575545, 12721.572099417],
    [0.00000000461, 3.28202687213, 68390.90837818099],
    [0.00000000333, 1.85263418548, 6438.4962494256],
    [0.00000000444, 2.52173122462, 10419.9862835076],
    [0.00000000345, 0.50295354855, 30639.856638633],
    [0.00000000317, 0.64488715148, 25685.872802808],
    [0.0000000042, 1.0436898787, 65236.2212932854],
    [0.0000000043, 0.29468575618, 846.0828347512],
    [0.00000000369, 3.30329866126, 283.8593188652],
    [0.00000000383, 6.12426824884, 16723.350142595],
    [0.00000000432, 3.69611343817, 6206.8097787158],
    [0.00000000322, 0.23643174893, 4487.8174062704],
    [0.00000000312, 1.59279792928, 15141.390794312],
    [0.0000000034, 3.65262667893, 4377.611085051],
    [0.0000000032, 4.65801222484, 853.196381752],
    [0.00000000382, 0.72522695142, 34520.3093093808],
    [0.00000000308, 6.07694941431, 433.7117378768],
    [0.00000000381, 0.29719200094, 54247.4131357504],
    [0.00000000273, 5.10612499134, 26084.0218062162],
    [0.00000000327, 0.87357957167, 5636.0650166766],
    [0.00000000316, 4.98971619034, 14.2270940016],
    [0.00000000348, 5.85906350865, 55022.9357470744],
    [0.00000000266, 2.32401657762, 5331.3574437408],
    [0.00000000275, 2.81833414149, 26482.1708096244],
    [0.00000000357, 2.8647147307, 16737.5772365966],
    [0.00000000352, 0.02643864769, 19004.6479494084],
    [0.00000000334, 0.57958876755, 32243.4985008806],
    [0.00000000295, 0.82103336665, 10239.5838660108],
    [0.00000000257, 5.90029498599, 35579.69123957],
    [0.00000000255, 4.69192200871, 18451.07854656599],
    [0.00000000277, 4.67485423683, 13341.6743113068],
    [0.00000000252, 2.55741079346, 1596.1864422846],
    [0.00000000346, 4.63863687772, 17157.0618804718],
    [0.00000000352, 2.48626623197, 135.0650800354],
    [0.00000000255, 5.91424964728, 15664.03552270859],
    [0.00000000244, 4.46905139414, 17267.26820169119],
    [0.0000000026, 2.18341012065, 25287.7237993998],
    [0.0000000033, 0.00455320447, 65857.55281669598],
    [0.00000000305, 2.10059286584, 26880.3198130326],
    [0.00000000257, 1.61402872357, 4797.0957289262],
    [0.00000000231, 0.24002639503, 21393.5419698576],
    [0.00000000284, 0.12825988472, 5540.0857894588],
    [0.00000000318, 5.75499995934, 12352.8526045448],
    [0.0000000032, 4.70394218733, 72321.1180744006],
    [0.00000000253, 4.5324038933, 419.4846438752],
    [0.00000000261, 0.17358858363, 24356.7807886416],
    [0.00000000272, 5.07229230789, 23550.34405168259],
    [0.00000000296, 2.46213303742, 69166.430989505],
    [0.00000000302, 3.08437904026, 53131.406024757],
    [0.00000000224, 3.67921078022, 9380.9596727172],
    [0.00000000272, 2.17575784176, 23536.11695768099],
    [0.00000000219, 5.75332666723, 12964.300703391],
    [0.00000000234, 1.12209632605, 3.9321532631],
    [0.00000000209, 0.42909936791, 2648.454825473],
    [0.0000000022, 4.96496733207, 5436.9930152402],
    [0.00000000277, 1.71992447536, 58177.62283197],
    [0.00000000266, 1.43153641541, 3097.88382272579],
    [0.00000000206, 4.10494335619, 10557.5941608238],
    [0.00000000214, 2.61449656774, 15508.6151232744],
    [0.00000000209, 5.49296216164, 5010.3948243642],
    [0.00000000261, 0.99972355107, 58953.145443294],
    [0.00000000198, 2.40254407, 28628.3362260996],
    [0.00000000204, 1.99075944859, 34570.0663348526],
    [0.00000000214, 0.51638035098, 38.0276726358],
    [0.00000000193, 2.06910498297, 24336.0053931492],
    [0.0000000023, 0.4732808533, 17253.04110768959],
    [0.00000000247, 2.01148064945, 36173.7081971002],
    [0.00000000246, 1.83822522499, 21947.1113727],
    [0.00000000256, 4.33835309645, 6915.8595893046],
    [0.00000000198, 6.11446823315, 17271.8840075264],
    [0.00000000234, 5.36990568091, 2787.0430238574],
    [0.00000000185, 1.45067669633, 18606.4989460002],
    [0.0000000023, 0.91533912843, 6058.7310542895],
    [0.00000000233, 4.83323079812, 1581.959348283],
    [0.00000000176, 5.65272380831, 20760.4270331914],
    [0.00000000234, 5.90115065485, 18635.9284545362],
    [0.00000000214, 1.61691324346, 17996.0311682222],
    [0.0000000018, 5.41096652773, 5760.4984318976],
    [0.00000000173, 3.73801095746, 91785.46086631398],
    [0.00000000172, 0.51814318659, 29026.48522950779],
    [0.00000000192, 1.59344786627, 5017.508371365],
    [0.00000000226, 0.11321008588, 33990.6183442862],
    [0.00000000179, 4.65915301945, 29424.634232916],
    [0.00000000188, 0.2492094898, 3531.5282502998],
    [0.0000000017, 0.72603260609, 640.8776073822],
    [0.00000000192, 2.25799771641, 14169.7935622304],
    [0.00000000176, 1.75775074281, 28286.9904848612],
    [0.000000002, 1.83368410088, 9814.6041002912],
    [0.00000000211, 2.81603870247, 1478.8665740644],
    [0.00000000172, 1.11319906056, 10818.1352869158],
    [0.00000000219, 5.13890233804, 24279.10701821359],
    [0.00000000184, 3.64173952238, 956.2891559706],
    [0.00000000166, 1.29239822343, 3744.8273457378],
    [0.0000000018, 5.71271482656, 316.3918696566],
    [0.00000000223, 6.12580534435, 76251.32777062019],
    [0.00000000162, 5.50452624789, 12323.4230960088],
    [0.00000000208, 3.88042652902, 73096.64068572459],
    [0.00000000218, 4.29696096782, 377.3736079158],
    [0.00000000172, 3.97463674764, 28230.18722269139],
    [0.00000000156, 3.84160753453, 5327.4761083828],
    [0.00000000169, 5.70350063397, 46848.3301747656],
    [0.00000000151, 3.89920078632, 27278.4688164408],
    [0.00000000195, 2.42317708585, 62883.3551395136],
    [0.00000000201, 3.14261170323, 62107.8325281896],
    [0.00000000162, 3.42123023323, 24705.70520908959],
    [0.00000000183, 2.2941134689, 40803.3851593722],
    [0.00000000148, 3.24559981303, 32217.2001810808],
    [0.00000000184, 3.44245174147, 40103.9178933198],
    [0.00000000136, 0.00348498513, 8858.3149443206],
    [0.00000000137, 2.92738425252, 16207.886271502],
    [0.00000000172, 3.96587718159, 29822.7832363242],
    [0.00000000139, 0.25220958383, 11513.8833167944],
    [0.00000000184, 2.87877365375, 10873.9860304804],
    [0.00000000147, 5.69950398995, 16193.65917750039],
    [0.00000000175, 3.63907739472, 11080.1715789176],
    [0.00000000135, 3.26846094813, 21548.9623692918],
    [0.00000000171, 3.64724509463, 24889.5747959916],
    [0.0000000014, 1.2736254269, 21202.093703746],
    [0.00000000145, 0.66679653739, 3641.7345715192],
    [0.00000000129, 4.15608371112, 8273.8208670324],
    [0.00000000168, 3.82417804302, 6805.6532680852],
    [0.0000000017, 5.39845370317, 224.3447957019],
    [0.00000000172, 1.47843592914, 32370.9789915656],
    [0.0000000013, 4.67095910002, 36147.4098773004],
    [0.00000000125, 0.07680535918, 5333.9002410216],
    [0.00000000124, 4.15290000577, 31570.7996493912],
    [0.00000000125, 4.1185971881, 9910.583327509],
    [0.00000000136, 1.82708563148, 9924.8104215106],
    [0.0000000012, 1.04537190097, 15265.8865193004],
    [0.00000000165, 5.12289379508, 10660.6869350424],
    [0.00000000119, 0.19411348304, 17370.3609759098],
    [0.00000000114, 1.79517429155, 1375.7737998458],
    [0.00000000116, 5.99365742245, 263.0839233728],
    [0.00000000134, 3.69411834084, 18100.00325845],
    [0.00000000151, 1.80535830937, 266.6070417218],
    [0.00000000118, 5.54417623632, 3903.9113764198],
    [0.00000000112, 5.73089622822, 30220.9322397324],
    [0.00000000147, 5.29857158519, 77026.8503819442],
    [0.00000000119, 2.83846081485, 2699.7348193176],
    [0.00000000156, 1.2644305554, 80181.53746683979],
    [0.00000000156, 5.13771437738, 1.4844727083],
    [0.00000000145, 3.84630581114, 66813.5648357332],
    [0.00000000154, 0.58077594433, 18699.6643528396],
    [0.00000000143, 3.26016999912, 6040.3472460174],
    [0.00000000115, 0.21237611638, 32367.0976562076],
    [0.00000000109, 4.04390598179, 130439.51570787099],
    [0.00000000114, 6.07423121041, 40077.61957352],
    [0.0000000011, 0.68736407062, 3958.1264411758],
    [0.00000000146, 4.56525575857, 66038.04222440919],
    [0.0000000011, 2.22336408031, 31968.9486527994],
    [0.00000000121, 3.12332456841, 394.6258850592],
    [0.00000000119, 2.44126507595, 401.6721217572],
    [0.00000000112, 3.41786904324, 38500.2760310722],
    [0.00000000109, 4.15648264511, 1265.5674786264],
    [0.00000000124, 3.26926487644, 6709.6740408674],
    [0.00000000141, 3.46768139435, 16097.6799502826],
    [0.00000000148, 2.27186633984, 1293.4842235826],
    [0.00000000137, 4.87262579773, 44034.1275895394],
    [0.00000000111, 4.33087326116, 27177.8515292002],
    [0.00000000102, 4.56697408157, 5959.570433334],
    [0.00000000104, 1.22611790835, 24602.61243487099],
    [0.00000000111, 0.29271036039, 5237.9210138038],
    [0.00000000113, 5.76108069146, 31172.650645983],
    [0.000000001, 3.44419535124, 30355.9973197678],
    [0.00000000105, 0.48502721215, 3956.5080160194],
    [0.00000000131, 3.28487967591, 59414.4818747484],
    [0.00000000097, 3.15562777196, 10027.9031957292],
    [0.00000000098, 5.08436451777, 24491.4257925834],
    [0.00000000116, 5.39243925075, 17686.7528455664],
    [0.00000000117, 4.13994336201, 16627.3709153772],
    [0.00000000119, 5.45339724432, 27832.0382192832],
    [0.00000000098, 1.18944845337, 44007.8292697396],
    [0.00000000091, 2.86809158433, 18208.349942592],
    [0.00000000124, 5.43245116672, 2636.725472637],
    [0.00000000116, 4.4598086724, 13362.4497067992],
    [0.00000000088, 2.47133399498, 6702.5604938666],
    [0.00000000121, 0.52300682043, 28.4491874678],
    [0.00000000085, 2.21973441671, 735.8765135318],
    [0.00000000105, 3.64026873013, 18415.51581209739],
    [0.00000000105, 0.24343045101, 18429.742906099],
    [0.00000000092, 5.74308140456, 11.0457002639],
    [0.00000000094, 6.14557745372, 1573.8204240988],
    [0.00000000094, 5.46347260935, 1580.8666607968],
    [0.00000000083, 5.4842488743, 742.9900605326],
    [0.00000000108, 5.26916160568, 70743.77453195279],
    [0.00000000116, 2.72571401307, 161710.6187862324],
    [0.00000000096, 5.12943311064, 22030.2129546696],
    [0.00000000084, 2.74970034886, 20894.77567920879],
    [0.00000000099, 1.01648896172, 11919.140866668],
    [0.00000000099, 3.90283567909, 11933.3679606696],
    [0.0000000008, 1.28098182292, 33163.395663024],
    [0.00000000103, 0.43338127123, 80957.06007816379],
    [0.00000000094, 5.8613291043, 17892.93839400359],
    [0.0000000011, 6.25729526026, 661.232926781],
    [0.000000001, 1.01944959123, 4598.0237274898],
    [0.00000000106, 5.98786109318, 69968.2519206288],
    [0.00000000095, 5.27640257078, 95.9792272178],
    [0.00000000101, 5.58615692225, 13095.8426650774],
    [0.00000000109, 2.68618945522, 84111.7471630594],
    [0.00000000092, 5.92272401863, 33460.92737919159],
    [0.00000000103, 0.01892067849, 47964.337285759],
    [0.00000000082, 2.58854156395, 47938.0389659592],
    [0.00000000093, 5.84445332309, 32765.2466596158],
    [0.00000000107, 2.86995440803, 6172.869528772],
    [0.0000000009, 0.51915630012, 5219.7617665391],
    [0.0000000009, 3.73170891564, 5227.6260730653],
    [0.00000000078, 5.89702842931, 34513.2630726828],
    [0.00000000094, 4.16664160604, 11609.8625440122],
    [0.00000000097, 5.08787396938, 8982.810669309],
    [0.00000000078, 6.26835415543, 7872.1487452752],
    [0.00000000101, 4.1977877082, 4583.7966334882],
    [0.00000000072, 5.40468649495, 23020.65308658799],
    [0.00000000077, 3.96334403949, 3185.1920272656],
    [0.00000000099, 5.7772575192, 22910.44676536859],
    [0.00000000093, 0.91772729175, 5729.506447149],
    [0.00000000071, 2.53843324238, 3627.5074775176],
    [0.00000000071, 0.61514327988, 27433.88921587499],
    [0.00000000068, 5.21450089904, 2221.856634597],
    [0.00000000072, 2.94606922574, 13760.5987102074],
    [0.00000000072, 2.04481864083, 35309.5610794992],
    [0.00000000096, 2.02693646758, 5966.6839803348],
    [0.00000000094, 1.21236802222, 17473.4537501284],
    [0.00000000071, 3.94153452882, 34911.412076091],
    [0.00000000068, 4.68947116168, 21150.8133658836],
    [0.0000000008, 2.49348315522, 25132.3033999656],
    [0.00000000082, 0.97339361819, 30774.5016425748],
    [0.00000000076, 5.54491230368, 142861.39123625818],
    [0.00000000078, 1.01658658652, 22476.73502749179],
    [0.00000000064, 5.98839573094, 11216.284290324],
    [0.00000000074, 1.25948865627, 34115.1140692746],
    [0.00000000066, 1.80880126197, 323.5054166574],
    [0.00000000074, 1.65437814878, 23006.42599258639],
    [0.00000000067, 3.98975982374, 51868.2486621788],
    [0.00000000082, 1.86594335533, 40273.6941942776],
    [0.00000000062, 4.68556276234, 2575.2390943292],
    [0.00000000085, 5.2563984589, 30562.182868205],
    [0.0000000008, 0.40859994601, 74673.9842281724],
    [0.00000000067, 3.96415073609, 5209.4668258006],
    [0.00000000063, 5.41882178958, 4384.7246320518],
    [0.00000000071, 0.28080261929, 25960.4226508892],
    [0.00000000078, 5.77035158401, 72936.23331633979],
    [0.00000000072, 4.9221411719, 11720.0688652316],
    [0.0000000007, 1.30721188046, 18216.443810661],
    [0.00000000063, 4.1252673712, 29062.5130961852],
    [0.00000000082, 0.60204110467, 77003.83841956219],
    [0.00000000058, 2.02797345474, 40565.2543247742],
    [0.0000000006, 0.70744607454, 7834.1210726394],
    [0.00000000064, 2.05436159498, 6819.8803620868],
    [0.00000000061, 4.66763566797, 5642.1982426092],
    [0.00000000057, 4.35624652161, 2008.557539159],
    [0.00000000077, 1.44779386507, 51894.5469819786],
    [0.00000000077, 1.1272428618, 73898.46161684839],
    [0.00000000065, 1.31820504355, 4708.2300487092],
    [0.0000000006, 5.34686688844, 647.0108333148],
    [0.00000000056, 3.95616700898, 5113.4875985828],
    [0.0000000007, 6.03080137925, 79219.3091663312],
    [0.00000000056, 0.73927686727, 41333.0761244668],
    [0.00000000063, 4.41666023387, 5.5229243074],
    [0.00000000073, 1.85122634129, 84887.2697743834],
    [0.00000000056, 3.11576506587, 36105.8590863156],
    [0.00000000056, 1.24745553815, 15906.7641266826],
    [0.00000000058, 4.84658284342, 42430.4857272918],
    [0.00000000056, 1.27165999126, 10241.2022911672],
    [0.00000000076, 4.10789640009, 88041.956859279],
    [0.00000000072, 0.6314327165, 11925.2740926006],
    [0.00000000068, 2.97387018514, 10550.480613823],
    [0.00000000073, 1.39941891014, 11293.4706743556],
    [0.00000000074, 2.77087663649, 3684.3780499902],
    [0.00000000054, 4.24556935906, 2301.58581590939],
    [0.00000000059, 5.74182376338, 15.252471185],
    [0.00000000069, 4.1181378615, 22490.9621214934],
    [0.00000000074, 6.19427031439, 1861.202861313],
    [0.00000000052, 1.73115418773, 792.7748884674],
    [0.00000000053, 1.96397950002, 14477.3511832],
    [0.00000000071, 4.6533874119, 2069.0068349066],
    [0.00000000051, 2.42710232037, 30376.3526391666],
    [0.00000000056, 2.08179532396, 66653.15746634839],
    [0.00000000051, 0.22629203906, 24093.2767891752],
    [0.00000000059, 6.20117814954, 29303.7289365794],
    [0.00000000054, 5.39320545061, 55798.4583583984],
    [0.00000000049, 4.64950803672, 4480.7038592696],
    [0.00000000048, 5.94732920545, 170.6728706192],
    [0.00000000059, 3.31483125685, 29289.5018425778],
    [0.00000000048, 4.46592712294, 5547.1993364596],
    [0.00000000056, 2.77350139482, 33716.9650658664],
    [0.0000000005, 1.35319136986, 37455.7264959744],
    [0.00000000055, 2.9977086931, 15567.988985188],
    [0.00000000053, 1.61246826616, 5422.7659212386],
    [0.00000000049, 1.92658497725, 7886.717712239],
    [0.00000000059, 1.83102054487, 78604.19392439199],
    [0.00000000062, 3.21680304319, 4176.041342449],
    [0.00000000061, 1.961051635, 491.6632924588],
    [0.00000000047, 2.89880335762, 6076.8903015542],
    [0.00000000053, 1.71464616511, 29890.6323471088],
    [0.00000000047, 5.16300128565, 6062.6632075526],
    [0.00000000053, 1.2287694302, 3428.4354760812],
    [0.00000000045, 1.08794812541, 533.2140834436],
    [0.00000000052, 1.04909228137, 799.8211251654],
    [0.00000000047, 1.41107637888, 9284.9131351966],
    [0.00000000057, 2.87613162761, 55824.7566781982],
    [0.00000000042, 0.50994347267, 117873.36400788819],
    [0.00000000049, 1.46161746733, 35707.7100829074],
    [0.00000000046, 5.67297778229, 37853.8754993826],
    [0.00000000044, 3.87328912437, 38252.0245027908],
    [0.00000000056, 2.54977546678, 77828.671313068],
    [0.00000000041, 1.16634027475, 14611.6998292174],
    [0.00000000058, 2.35091130891, 17429.3614528576],
    [0.00000000055, 2.45719098581, 14867.73751589219],
    [0.00000000057, 6.07668633262, 5999.2165311262],
    [0.00000000053, 4.76783532163, 16833.55646381439],
    [0.0000000004, 2.42221373256, 38654.05484155699],
    [0.00000000054, 2.59413279726, 6208.2942514241],
    [0.00000000048, 3.03623053034, 37057.5774925662],
    [0.00000000051, 3.26891803446, 88817.479470603],
    [0.0000000004, 2.45446432047, 11396.5634485742],
    [0.00000000041, 0.42382144318, 664.75604513],
    [0.00000000041, 0.21291918893, 8584.6616659008],
    [0.0000000004, 2.15599036973, 11764.330768859],
    [0.00000000043, 0.51542555301, 59728.668054618],
    [0.0000000004, 1.90659718828, 4900.1885031448],
    [0.00000000053, 5.52955194812, 91972.1665554986],
    [0.00000000038, 4.95207714594, 39048.3225096072],
    [0.00000000037, 2.82551748542, 4811.3228229278],
    [0.00000000038, 2.04488826514, 27035.7402124668],
    [0.00000000041, 1.03104318973, 4267.4047638316],
    [0.00000000039, 6.03079773396, 20.3553193988],
    [0.00000000045, 4.77778333859, 7445.5505543992],
    [0.00000000036, 5.48178982335, 18312.42303787879],
    [0.0000000004, 0.50169021867, 3215.1363806432],
    [0.00000000036, 4.23699175298, 33318.8160624582],
    [0.00000000039, 5.54442185218, 32992.72279240479],
    [0.00000000046, 2.74913926743, 8671.9698704406],
];

const K1: &[Term] = &[
    [0.00082267418, PI, 0.0],
    [0.00000026605, 2.0722927526, 775.522611324],
    [0.00000021081, 3.57698980914, 1059.3819301892],
    [0.00000019125, 1.0150872258, 4694.0029547076],
    [0.0000000838, 3.4458699184, 7.1135470008],
    [0.00000007457, 4.57985332526, 796.2980068164],
    [0.00000006463, 2.49473878135, 3154.6870848956],
    [0.00000005146, 0.58714547534, 4164.311989613],
    [0.00000004067, 3.20010724578, 1194.4470102246],
    [0.00000004067, 3.49983542863, 4705.7323075436],
    [0.00000003385, 4.38377706479, 1589.0728952838],
    [0.00000002934, 2.16257548309, 10447.3878396044],
    [0.00000002838, 1.76365773948, 1748.016413067],
    [0.00000003152, 5.47933924998, 5216.5803728014],
    [0.00000003041, 5.01589419641, 5230.807466803],
    [0.00000002635, 0.36584370493, 2146.1654164752],
    [0.00000002694, 3.9174316666, 7084.8967811152],
    [0.00000002651, 5.06301812783, 801.8209311238],
    [0.00000001834, 2.88449844448, 5643.1785636774],
    [0.00000001842, 4.64367921572, 17260.1546546904],
    [0.00000002352, 1.09641588123, 155.4203994342],
    [0.00000002262, 3.16580608266, 1349.8674096588],
    [0.00000001701, 4.56954617238, 951.7184062506],
    [0.00000001464, 0.12557037985, 3738.761430108],
    [0.00000001547, 5.34339869614, 11015.1064773348],
    [0.00000001426, 5.97428354685, 553.5694028424],
    [0.00000001612, 4.08661034958, 5753.3848848968],
    [0.0000000135, 4.44924753373, 6812.766815086],
    [0.0000000177, 2.57254171765, 26.2983197998],
    [0.0000000179, 1.8027575658, 1592.5960136328],
    [0.00000001519, 4.98873040436, 8635.9420037632],
    [0.00000001305, 3.87250778258, 398.1490034082],
    [0.00000001246, 5.03586806903, 536.8045120954],
    [0.00000001192, 5.54420835219, 522.5774180938],
    [0.00000001024, 5.02794388685, 4136.9104335162],
    [0.00000000977, 2.16037361829, 5088.6288397668],
    [0.00000001004, 3.58011795524, 4690.4798363586],
    [0.00000000902, 4.24177081847, 426.598190876],
    [0.00000000981, 4.99224207208, 4686.8894077068],
    [0.00000000998, 0.48271682477, 14945.3161735544],
    [0.00000001191, 3.91705501373, 11506.7697697936],
    [0.00000000959, 1.74095400533, 9917.6968745098],
    [0.00000000803, 5.44504629014, 4701.1165017084],
    [0.00000000867, 5.65094404327, 529.6909650946],
    [0.00000000796, 4.19786079904, 5223.6939198022],
    [0.00000000897, 0.15674520074, 3634.6210245184],
    [0.00000000736, 0.40115902321, 1990.745017041],
    [0.00000000754, 5.52883526621, 3128.3887650958],
    [0.00000000672, 0.63908402841, 242.728603974],
    [0.00000000684, 0.28372190716, 3930.2096962196],
    [0.00000000676, 1.90485581289, 18875.525869774],
    [0.00000000601, 3.35737261961, 16200.7727245012],
    [0.00000000625, 0.03374469695, 12566.1516999828],
    [0.00000000565, 0.34060181641, 1066.49547719],
    [0.0000000055, 3.38641106507, 639.897286314],
    [0.00000000712, 4.9892361211, 4292.3308329504],
    [0.00000000554, 5.39058454178, 7632.9432596502],
    [0.00000000518, 3.94009561313, 8031.0922630584],
    [0.00000000503, 3.65057138447, 5429.8794682394],
    [0.00000000526, 6.15896833928, 10984.1923516998],
    [0.0000000053, 0.35376843988, 10969.9652576982],
    [0.00000000462, 5.78737665175, 23013.5395395872],
    [0.00000000443, 0.58099089567, 7079.3738568078],
    [0.00000000432, 0.11305361289, 3894.1818295422],
    [0.00000000471, 3.32671656949, 22805.7355659936],
    [0.00000000412, 4.99163729249, 2118.7638603784],
    [0.00000000536, 3.63353284234, 4535.0594369244],
    [0.00000000383, 0.42872518693, 7058.5984613154],
    [0.00000000401, 4.18345331102, 16730.4636895958],
    [0.00000000356, 6.06487187899, 2942.4634232916],
    [0.0000000034, 1.92331329928, 24072.9214697764],
    [0.00000000419, 6.27970723173, 4732.0306273434],
    [0.00000000344, 0.91195765312, 10575.4066829418],
    [0.00000000315, 2.91130934943, 2352.8661537718],
    [0.00000000307, 5.70653342629, 10973.55568635],
    [0.00000000401, 0.52607159453, 7234.794256242],
    [0.00000000333, 4.74834443627, 26735.9452622132],
    [0.00000000335, 1.81442927909, 5849.3641121146],
    [0.00000000285, 1.64332175831, 10988.808157535],
    [0.00000000293, 5.28075768136, 2388.8940204492],
    [0.00000000286, 1.97447480616, 6681.2248533996],
    [0.00000000342, 0.73644046029, 6069.7767545534],
    [0.00000000303, 1.29157997804, 5863.5912061162],
    [0.0000000028, 5.20254512718, 10213.285546211],
    [0.00000000298, 2.73033558524, 17782.7320727842],
    [0.00000000291, 2.24528212685, 17796.9591667858],
    [0.00000000249, 2.23277380635, 4933.2084403326],
    [0.00000000243, 1.93743489684, 6836.6452528338],
    [0.00000000238, 2.87529177684, 14919.0178537546],
    [0.00000000241, 1.51955401949, 3496.032826134],
    [0.00000000238, 6.1697707908, 30666.1549584328],
    [0.00000000224, 2.71072504043, 13517.8701062334],
    [0.00000000212, 4.1851387154, 955.5997416086],
    [0.00000000223, 2.90951624262, 15671.0817594066],
    [0.00000000259, 2.3426611783, 10177.2576795336],
    [0.00000000193, 1.17899883749, 13916.0191096416],
    [0.00000000216, 1.23955505435, 8662.240323563],
    [0.00000000198, 1.12390587064, 20426.571092422],
    [0.00000000201, 0.40507096827, 18319.5365848796],
    [0.00000000203, 4.94261662432, 7342.4577801806],
    [0.00000000199, 4.17310731355, 18849.2275499742],
    [0.00000000191, 0.38832010885, 14143.4952424306],
    [0.0000000025, 5.61532759145, 213.299095438],
    [0.00000000191, 4.49050665361, 4157.1984426122],
    [0.00000000199, 6.14181613733, 10440.2742926036],
    [0.00000000183, 0.10670283402, 18209.33026366019],
    [0.00000000245, 5.46804083226, 7477.522860216],
    [0.00000000204, 5.9167194599, 52175.8062831484],
    [0.00000000199, 4.62436145224, 6283.0758499914],
    [0.00000000199, 0.82206310954, 1577.3435424478],
    [0.00000000195, 2.17331065876, 220.4126424388],
    [0.0000000018, 4.04167392121, 7860.4193924392],
    [0.00000000167, 3.76557315266, 11712.9553182308],
    [0.00000000161, 3.75957676523, 9779.1086761254],
    [0.00000000164, 1.78512754698, 18073.7049386502],
    [0.00000000192, 2.57360743952, 206.1855484372],
    [0.00000000191, 1.31584087642, 9388.0059094152],
    [0.00000000171, 1.30783816428, 34596.3646546524],
    [0.00000000156, 0.11265764092, 10454.5013866052],
    [0.00000000176, 0.92526234809, 1052.2683831884],
    [0.00000000152, 2.00705624375, 6496.3749454294],
    [0.00000000149, 1.25830615623, 2544.3144198834],
    [0.00000000142, 1.27957926486, 4804.209275927],
    [0.00000000154, 5.35098523615, 4171.4255366138],
    [0.00000000176, 4.15588640834, 13119.72110282519],
    [0.00000000142, 5.58118598694, 22779.4372461938],
    [0.00000000149, 4.50392444421, 16460.33352952499],
    [0.0000000014, 2.52084864445, 12592.4500197826],
    [0.00000000139, 3.20048906007, 22003.9146348698],
    [0.00000000134, 3.34639503887, 6438.4962494256],
    [0.00000000163, 2.49975412667, 11769.8536931664],
    [0.00000000172, 0.74328420621, 8827.3902698748],
    [0.00000000125, 2.92716642385, 16858.4825329332],
    [0.00000000129, 4.54319093271, 21954.15760939799],
    [0.00000000136, 5.98076481907, 3.523118349],
    [0.00000000134, 5.32671334778, 22483.84857449259],
    [0.00000000118, 4.06719955983, 7875.6718636242],
    [0.00000000123, 2.65437440138, 5636.0650166766],
    [0.00000000157, 3.21357842323, 1551.045222648],
    [0.00000000114, 5.57950238047, 12721.572099417],
    [0.00000000153, 2.27794770442, 5650.2921106782],
    [0.00000000123, 2.72892629971, 38526.574350872],
    [0.00000000109, 4.49920465034, 110.2063212194],
    [0.00000000111, 5.51488872594, 640.8776073822],
    [0.00000000113, 4.6250884437, 25934.1243310894],
    [0.00000000106, 0.84568135338, 5120.6011455836],
    [0.00000000131, 4.29798616416, 14712.317116458],
    [0.00000000107, 4.33270992558, 433.7117378768],
    [0.00000000109, 0.82968813498, 5331.3574437408],
    [0.00000000112, 2.49599456445, 10021.8372800994],
    [0.00000000108, 3.77096252154, 9623.6882766912],
    [0.00000000109, 5.73353151454, 3340.6124266998],
    [0.00000000102, 3.47050860612, 5746.271337896],
    [0.00000000114, 1.537045201, 16723.350142595],
    [0.00000000102, 4.86793037522, 11499.6562227928],
    [0.00000000106, 0.65271170994, 28766.924424484],
    [0.00000000099, 3.8336017496, 16522.6597160022],
    [0.00000000123, 5.96581005046, 16062.1845261168],
    [0.00000000097, 0.91473011734, 149.5631971346],
    [0.00000000096, 0.92294159491, 1596.1864422846],
    [0.00000000096, 2.62369358177, 853.196381752],
    [0.00000000094, 1.6538967767, 15720.8387848784],
    [0.00000000093, 0.2565378073, 11790.6290886588],
    [0.00000000097, 0.70449540569, 26709.6469424134],
    [0.00000000129, 6.00746308661, 3104.9300594238],
    [0.00000000129, 2.92606714168, 3097.88382272579],
    [0.00000000093, 2.68724969191, 78263.70942472259],
    [0.000000001, 0.00870252588, 19402.7969528166],
    [0.00000000106, 1.14353877749, 16737.5772365966],
    [0.00000000092, 3.4189854715, 11371.7046897582],
    [0.0000000009, 5.17157551392, 9380.9596727172],
    [0.00000000118, 2.25442254198, 7238.6755916],
    [0.00000000108, 1.66150999342, 16496.3613962024],
    [0.00000000089, 6.05263939465, 29864.334027309],
    [0.00000000089, 1.56609587621, 8429.2412664666],
    [0.00000000101, 1.19715554429, 2379.1644735716],
    [0.00000000083, 3.08592718097, 19651.048481098],
    [0.00000000114, 3.87601683827, 2787.0430238574],
    [0.00000000083, 4.67173282732, 19800.9459562248],
    [0.00000000081, 3.06084510817, 29826.3063546732],
    [0.0000000011, 1.02507570356, 10419.9862835076],
    [0.00000000082, 1.113999437, 15664.03552270859],
    [0.00000000097, 6.10923456018, 17654.7805397496],
    [0.00000000089, 4.14988664574, 42456.7840470916],
    [0.0000000008, 2.23324246569, 20.7753954924],
    [0.00000000082, 5.26020984037, 14314.1681130498],
    [0.00000000074, 3.40492763382, 5326.7866940208],
    [0.00000000086, 2.38792934735, 39609.6545831656],
    [0.00000000073, 5.17040262424, 20452.8694122218],
    [0.0000000008, 3.37706387103, 23550.34405168259],
    [0.00000000081, 3.85388446884, 23536.11695768099],
    [0.00000000086, 1.48918167767, 19004.6479494084],
    [0.00000000069, 4.52857093216, 23581.2581773176],
    [0.00000000075, 3.78056596073, 632.7837393132],
    [0.00000000079, 2.10734345354, 17253.04110768959],
    [0.00000000069, 1.19876063547, 33794.5437235286],
    [0.00000000089, 0.47702567132, 5884.9268465832],
    [0.00000000067, 4.33286719521, 2699.7348193176],
    [0.00000000068, 0.81376115089, 17256.6315363414],
    [0.00000000065, 0.71193691424, 12323.4230960088],
    [0.0000000007, 1.23375800944, 5507.5532386674],
    [0.0000000006, 0.54662365378, 76.2660712756],
    [0.00000000059, 2.67937438024, 17267.26820169119],
    [0.00000000063, 2.11401137033, 30639.856638633],
    [0.0000000006, 2.92949777736, 18606.4989460002],
    [0.00000000068, 1.79189884461, 22345.2603761082],
    [0.00000000065, 5.57072107397, 46386.9937433112],
    [0.00000000069, 1.64277890371, 20597.2439630412],
    [0.00000000056, 5.97558084854, 27511.4678735372],
    [0.00000000057, 5.90465830443, 10818.1352869158],
    [0.00000000055, 0.24185870357, 24383.0791084414],
    [0.00000000056, 0.13325089687, 22743.4093795164],
    [0.00000000058, 5.93660106394, 5486.777843175],
    [0.00000000053, 2.66364387335, 8273.8208670324],
    [0.00000000053, 2.62924201206, 37724.7534197482],
    [0.00000000053, 2.64811417659, 20199.094959633],
    [0.00000000061, 3.29251305194, 21947.1113727],
    [0.00000000066, 0.0748189755, 5856.4776591154],
    [0.00000000069, 4.7544281731, 6040.3472460174],
    [0.00000000048, 2.95318621349, 949.1756089698],
    [0.00000000048, 1.52992381097, 4061.2192153944],
    [0.00000000047, 0.86797568576, 17996.0311682222],
    [0.00000000048, 2.53396048167, 15265.8865193004],
    [0.00000000045, 2.38469047069, 12139.5535091068],
    [0.00000000044, 1.14144422478, 31441.6775697568],
    [0.00000000048, 1.02797784101, 16193.65917750039],
    [0.00000000044, 3.36159341451, 5760.4984318976],
    [0.00000000044, 4.7427372717, 21548.9623692918],
    [0.00000000042, 1.60970205156, 28313.288804661],
    [0.00000000042, 4.7207064256, 11513.8833167944],
    [0.00000000044, 2.47021557317, 3185.1920272656],
    [0.00000000047, 0.708242948, 50317.2034395308],
    [0.00000000043, 5.68564368188, 9910.583327509],
    [0.00000000051, 2.21778747682, 9437.762934887],
    [0.00000000047, 0.49944783586, 1581.959348283],
    [0.00000000045, 0.03309997761, 5017.508371365],
    [0.00000000047, 3.46204053718, 23539.7073863328],
    [0.00000000044, 4.08959518347, 21424.4666443034],
    [0.0000000004, 4.06053192551, 41654.9631159678],
    [0.00000000039, 5.54285256719, 419.4846438752],
    [0.0000000004, 4.48078463226, 23141.5583829246],
    [0.00000000046, 3.57083366422, 25287.7237993998],
    [0.00000000041, 3.39534547315, 13367.9726311066],
    [0.00000000038, 5.46163744242, 2648.454825473],
    [0.00000000039, 4.26600014317, 12964.300703391],
    [0.00000000045, 4.46386919039, 5481.2549188676],
    [0.00000000038, 4.91305216122, 4487.8174062704],
    [0.00000000043, 5.09254143908, 24889.5747959916],
    [0.00000000036, 2.89771658453, 4797.0957289262],
    [0.00000000038, 1.88113296871, 25685.872802808],
    [0.00000000036, 4.354312844, 18208.349942592],
    [0.00000000035, 2.59158426347, 35371.8872659764],
    [0.00000000036, 1.18614470426, 16207.886271502],
    [0.00000000036, 5.4635003651, 65697.55772473979],
];

const K2: &[Term] = &[
    [0.00002762465, 0.0, 0.0],
    [0.00000001225, 0.37517058299, 775.522611324],
    [0.00000000847, 2.08995893115, 1059.3819301892],
    [0.0000000079, 2.279877978, 4694.0029547076],
    [0.00000000562, 2.60981066374, 155.4203994342],
    [0.00000000549, 5.03854500202, 801.8209311238],
    [0.00000000319, 1.66072186529, 1194.4470102246],
    [0.000000003, 1.74908958073, 4164.311989613],
    [0.00000000293, 2.98079061367, 796.2980068164],
    [0.00000000296, 4.1928609218, 3154.6870848956],
    [0.00000000283, 1.20361776088, 553.5694028424],
    [0.00000000269, 6.0853097724, 951.7184062506],
    [0.0000000026, 2.2290302544, 26.2983197998],
    [0.00000000225, 3.2898037209, 1748.016413067],
    [0.00000000268, 4.68552342525, 1349.8674096588],
    [0.00000000211, 3.04788706713, 1589.0728952838],
    [0.00000000189, 5.41324853566, 242.728603974],
    [0.00000000189, 1.80500599086, 4705.7323075436],
    [0.00000000211, 0.27668087102, 1592.5960136328],
    [0.00000000162, 2.03989853592, 5223.6939198022],
    [0.00000000124, 3.3948356371, 10447.3878396044],
    [0.00000000123, 5.61761785676, 7084.8967811152],
    [0.00000000116, 5.16479484307, 1990.745017041],
    [0.00000000148, 5.86618070639, 3128.3887650958],
    [0.00000000107, 1.90679225855, 2146.1654164752],
    [0.00000000095, 2.30914171583, 398.1490034082],
    [0.00000000081, 4.54722481584, 5643.1785636774],
    [0.0000000008, 3.47746208704, 4136.9104335162],
    [0.00000000081, 5.0892823602, 4690.4798363586],
    [0.00000000073, 5.63562763848, 17260.1546546904],
    [0.00000000094, 1.1982977764, 5753.3848848968],
    [0.00000000068, 1.25972806142, 3634.6210245184],
    [0.00000000069, 1.62413384783, 3894.1818295422],
    [0.00000000086, 0.22660355337, 4732.0306273434],
    [0.00000000085, 0.21911566303, 4292.3308329504],
    [0.00000000071, 3.25982296776, 8635.9420037632],
    [0.00000000067, 0.77316672109, 11015.1064773348],
    [0.00000000059, 4.84852669294, 3738.761430108],
    [0.00000000057, 2.89813169148, 9917.6968745098],
    [0.00000000058, 3.76545187595, 2388.8940204492],
    [0.00000000069, 5.93701219336, 1577.3435424478],
    [0.00000000054, 3.15081014293, 6812.766815086],
    [0.00000000067, 1.07267968195, 7058.5984613154],
    [0.00000000063, 2.10251932859, 4535.0594369244],
    [0.00000000065, 6.12277119725, 3930.2096962196],
    [0.00000000048, 3.02954478609, 3496.032826134],
    [0.00000000054, 3.67967150986, 11506.7697697936],
    [0.00000000041, 3.62992948583, 5088.6288397668],
    [0.00000000045, 0.59584778379, 7632.9432596502],
    [0.00000000042, 2.19809372723, 14945.3161735544],
    [0.0000000004, 5.48631857138, 5429.8794682394],
    [0.00000000039, 0.71028929242, 4933.2084403326],
    [0.00000000039, 3.44440136521, 6836.6452528338],
    [0.00000000048, 2.03009764611, 7234.794256242],
    [0.00000000038, 1.5704120732, 639.897286314],
];

const K3: &[Term] = &[
    [0.00000116955, 0.0, 0.0],
];

const K4: &[Term] = &[
    [0.00000002696, PI, 0.0],
];

const K5: &[Term] = &[
    [0.00000000071, PI, 0.0],
];

const H0: &[Term] = &[
    [0.01628447663, 0.0, 0.0],
    [0.00001986929, 5.80464886318, 1577.3435424478],
    [0.00001864029, 2.12650300196, 5223.6939198022],
    [0.00001510978, 2.16070229051, 529.6909650946],
    [0.00000819544, 5.04224333254, 2352.8661537718],
    [0.00000483355, 0.94384676328, 5507.5532386674],
    [0.0000048073, 1.60400966048, 10213.285546211],
    [0.00000448935, 5.94987750309, 398.1490034082],
    [0.00000354605, 1.70188277221, 4694.0029547076],
    [0.00000278987, 3.70742582004, 1059.3819301892],
    [0.00000294243, 2.35624478692, 775.522611324],
    [0.00000230089, 2.3662924949, 9437.762934887],
    [0.00000210039, 3.28388935733, 10977.078804699],
    [0.00000178133, 2.49083562024, 17789.845619785],
    [0.00000096628, 4.53886845461, 796.2980068164],
    [0.0000012928, 3.78871222562, 13367.9726311066],
    [0.00000096975, 2.439617667, 213.299095438],
    [0.00000078833, 1.57611478459, 5856.4776591154],
    [0.00000078224, 5.21110078908, 17298.1823273262],
    [0.0000007303, 0.17047151152, 6283.0758499914],
    [0.00000071889, 2.21128742509, 3154.6870848956],
    [0.00000054085, 2.86035616077, 10447.3878396044],
    [0.00000047355, 1.27342614649, 4164.311989613],
    [0.0000004234, 3.63204564682, 7.1135470008],
    [0.00000055026, 5.31305130919, 2544.3144198834],
    [0.00000049329, 0.3502708563, 21228.3920235458],
    [0.00000038591, 3.20013618718, 801.8209311238],
    [0.00000044725, 3.78457637829, 4705.7323075436],
    [0.00000033434, 0.44799033642, 2146.1654164752],
    [0.00000030028, 4.2494315225, 1589.0728952838],
    [0.00000034257, 2.08062585709, 17260.1546546904],
    [0.00000038922, 2.82554883886, 26087.9031415742],
    [0.00000025568, 3.12836763274, 1194.4470102246],
    [0.00000032236, 3.62097537831, 23543.23050468179],
    [0.00000031929, 1.77259235162, 25158.6017197654],
    [0.00000030052, 3.63609619943, 7084.8967811152],
    [0.00000026998, 4.37231025874, 16730.4636895958],
    [0.00000024484, 3.76449325575, 6812.766815086],
    [0.00000022368, 4.61049763041, 426.598190876],
    [0.00000019819, 4.80088598059, 5753.3848848968],
    [0.00000018985, 0.09504486018, 3738.761430108],
    [0.00000017742, 1.85524859155, 1748.016413067],
    [0.00000016759, 0.60835730976, 26.2983197998],
    [0.00000021039, 3.19487995539, 29088.811415985],
    [0.00000014503, 0.19585627636, 11506.7697697936],
    [0.00000018583, 1.51359089364, 3340.6124266998],
    [0.00000018586, 2.46923185056, 13521.7514415914],
    [0.00000018063, 0.89567248704, 5486.777843175],
    [0.00000017442, 5.0602370743, 11015.1064773348],
    [0.0000001655, 1.33631601302, 18073.7049386502],
    [0.00000015631, 2.32467237202, 5643.1785636774],
    [0.00000015893, 2.75526767021, 22003.9146348698],
    [0.0000001202, 2.29584383924, 5088.6288397668],
    [0.00000015103, 5.2802739606, 8635.9420037632],
    [0.00000014044, 4.61713404227, 33019.0211122046],
    [0.00000013794, 4.46145453857, 12036.4607348882],
    [0.00000012899, 4.17819697737, 25934.1243310894],
    [0.00000010345, 1.39496302569, 3128.3887650958],
    [0.00000010621, 5.36114548056, 5216.5803728014],
    [0.00000010349, 1.99887324181, 5230.807466803],
    [0.00000011266, 0.20076961236, 14945.3161735544],
    [0.00000008825, 2.4349365572, 9917.6968745098],
    [0.00000009711, 3.99457031445, 16200.7727245012],
    [0.00000008726, 3.2365250246, 23013.5395395872],
    [0.00000009835, 5.60203721863, 29864.334027309],
    [0.00000009345, 3.26194362349, 1349.8674096588],
    [0.00000009466, 6.03935520837, 36949.2308084242],
    [0.00000007903, 5.87711198557, 52175.8062831484],
    [0.00000006484, 4.96979335761, 4136.9104335162],
    [0.00000006188, 3.69907141335, 4690.4798363586],
    [0.00000007859, 2.7741622555, 8429.2412664666],
    [0.000000083, 1.94153363328, 18422.62935909819],
    [0.00000006081, 4.14906498513, 8031.0922630584],
    [0.00000007643, 1.62419959918, 18875.525869774],
    [0.00000007426, 1.72027148458, 1592.5960136328],
    [0.00000007282, 0.74305710251, 33794.5437235286],
    [0.00000005475, 0.84206361823, 3634.6210245184],
    [0.00000006094, 4.64871534287, 4732.0306273434],
    [0.00000006571, 6.2395136629, 14143.4952424306],
    [0.00000005234, 4.66867318754, 951.7184062506],
    [0.00000004844, 4.51875245164, 955.5997416086],
    [0.0000000643, 1.17835886689, 40879.4405046438],
    [0.00000004612, 2.10710399676, 24072.9214697764],
    [0.000000048, 2.44768544974, 7860.4193924392],
    [0.00000005753, 4.75282240478, 29296.6153895786],
    [0.0000000466, 2.8525116732, 7058.5984613154],
    [0.00000004244, 2.9887682147, 2942.4634232916],
    [0.00000005325, 3.04742256903, 22805.7355659936],
    [0.00000005308, 2.16743188943, 37724.7534197482],
    [0.0000000425, 5.93279864167, 18319.5365848796],
    [0.00000004766, 1.19968271915, 155.4203994342],
    [0.00000003742, 2.03947338751, 6681.2248533996],
    [0.00000004966, 2.44601751167, 11926.2544136688],
    [0.00000004293, 2.10316987651, 7238.6755916],
    [0.00000004285, 5.15927478446, 536.8045120954],
    [0.00000003494, 6.07556914662, 553.5694028424],
    [0.00000003938, 0.10955967703, 12566.1516999828],
    [0.00000004712, 0.43341694722, 103.0927742186],
    [0.00000003346, 5.54518486816, 7632.9432596502],
    [0.00000003282, 2.58886596194, 20426.571092422],
    [0.00000003378, 6.0090158399, 10973.55568635],
    [0.00000004053, 2.25469129195, 522.5774180938],
    [0.00000004394, 2.60051647343, 44809.6502008634],
    [0.00000003143, 2.52480768383, 4701.1165017084],
    [0.00000004066, 2.71215397963, 4590.910180489],
    [0.00000003689, 4.68059038419, 11371.7046897582],
    [0.0000000367, 5.4322321564, 22483.84857449259],
    [0.00000003229, 3.90467903681, 639.897286314],
    [0.00000003384, 5.50655364509, 39609.6545831656],
    [0.00000003834, 3.59188920421, 41654.9631159678],
    [0.00000003768, 4.47048984887, 26735.9452622132],
    [0.00000003028, 4.96337333793, 4686.8894077068],
    [0.0000000278, 0.52677578491, 7079.3738568078],
    [0.0000000292, 4.31617343789, 10988.808157535],
    [0.00000002617, 4.70638403425, 2118.7638603784],
    [0.00000003559, 4.00327865453, 6069.7767545534],
    [0.0000000303, 6.09358175818, 8662.240323563],
    [0.00000002917, 5.10353740519, 4292.3308329504],
    [0.0000000227, 0.31237175106, 1990.745017041],
    [0.00000003017, 4.02264362653, 48739.859897083],
    [0.00000002943, 3.84235238097, 12168.0026965746],
    [0.00000002362, 5.0606483484, 1551.045222648],
    [0.00000002754, 5.01638451049, 45585.1728121874],
    [0.00000002023, 1.11090357975, 10575.4066829418],
    [0.00000002692, 5.8934356682, 30666.1549584328],
    [0.00000002554, 0.79615526333, 74.7815985673],
    [0.00000002105, 3.28458321705, 3930.2096962196],
    [0.00000001962, 5.80524520836, 14919.0178537546],
    [0.00000001938, 1.59437410826, 13916.0191096416],
    [0.00000001961, 3.58138322462, 15671.0817594066],
    [0.00000001784, 5.77435462697, 3.523118349],
    [0.00000001812, 2.64558312846, 78263.70942472259],
    [0.0000000213, 3.09392858496, 5429.8794682394],
    [0.00000002014, 4.38654739806, 28766.924424484],
    [0.00000002289, 3.90458218245, 8827.3902698748],
    [0.00000002224, 3.56016460006, 4535.0594369244],
    [0.00000002152, 5.68198285563, 11769.8536931664],
    [0.00000002202, 5.17533239609, 9225.539273283],
    [0.00000001561, 0.46057648907, 1066.49547719],
    [0.00000002137, 5.66053722749, 15110.4661198662],
    [0.00000001768, 0.34742090445, 14314.1681130498],
    [0.00000001625, 0.99222308455, 18849.2275499742],
    [0.00000001862, 1.2522111776, 12592.4500197826],
    [0.00000002081, 5.44474123396, 52670.0695933026],
    [0.00000001972, 0.15770745808, 49515.382508407],
    [0.00000001807, 5.12408883598, 21954.15760939799],
    [0.00000001779, 0.25537984485, 10969.9652576982],
    [0.00000001763, 3.14901048805, 10984.1923516998],
    [0.00000001936, 1.03309849426, 34596.3646546524],
    [0.00000001403, 3.77499505757, 9623.6882766912],
    [0.00000001724, 1.20642485048, 14712.317116458],
    [0.00000001496, 5.79755705291, 2379.1644735716],
    [0.00000001461, 4.21701753567, 7342.4577801806],
    [0.00000001304, 4.53976030919, 4804.209275927],
    [0.00000001273, 2.96317916039, 13517.8701062334],
    [0.00000001323, 0.22558240974, 3894.1818295422],
    [0.00000001623, 0.66314892765, 7234.794256242],
    [0.00000001565, 1.41782851711, 149.5631971346],
    [0.0000000159, 2.67823441497, 18209.33026366019],
    [0.00000001398, 3.47682532581, 5120.6011455836],
    [0.00000001165, 2.00740759301, 9388.0059094152],
    [0.00000001134, 3.21009206465, 29826.3063546732],
    [0.00000001167, 0.5348640304, 242.728603974],
    [0.00000001409, 1.5822135853, 53445.5922046266],
    [0.00000001384, 3.20092628957, 11712.9553182308],
    [0.0000000144, 0.58362501064, 56600.2792895222],
    [0.00000001398, 2.45586589898, 38526.574350872],
    [0.00000001122, 3.47417298914, 16858.4825329332],
    [0.00000001381, 1.19171431732, 18052.9295431578],
    [0.00000001279, 3.02326029338, 17654.7805397496],
    [0.00000001011, 4.47879779925, 110.2063212194],
    [0.00000001416, 4.92774234858, 6133.5126528568],
    [0.00000001247, 2.69150113914, 16522.6597160022],
    [0.00000000989, 5.29461014196, 20.7753954924],
    [0.00000001285, 2.58555083497, 6496.3749454294],
    [0.0000000115, 1.69054913861, 5849.3641121146],
    [0.0000000119, 1.70751599852, 1162.4747044078],
    [0.00000001087, 2.25260517411, 4061.2192153944],
    [0.00000001188, 4.32217190656, 11790.6290886588],
    [0.00000001193, 5.57348184137, 4907.3020501456],
    [0.00000001156, 1.92415609448, 33326.5787331742],
    [0.00000000972, 0.96218541091, 76.2660712756],
    [0.00000000875, 2.41970391793, 22779.4372461938],
    [0.00000001098, 4.68141608907, 5863.5912061162],
    [0.00000001036, 3.98177196354, 5326.7866940208],
    [0.00000000852, 2.36853373654, 17256.6315363414],
    [0.00000000812, 4.81954775752, 16460.33352952499],
    [0.00000000991, 2.36842552685, 17796.9591667858],
    [0.00000000976, 0.85319916738, 632.7837393132],
    [0.00000001032, 2.5073852472, 10177.2576795336],
    [0.00000001025, 5.87769794089, 35050.00027447539],
    [0.00000000849, 2.10879651558, 16496.3613962024],
    [0.0000000101, 5.39982061879, 7477.522860216],
    [0.00000001013, 3.87856518391, 42456.7840470916],
    [0.00000001005, 3.00670803866, 57375.8019008462],
    [0.00000000767, 2.15123589241, 4933.2084403326],
    [0.00000001014, 5.5898676268, 17782.7320727842],
    [0.00000000904, 4.84373786857, 20597.2439630412],
    [0.00000001, 2.00566657332, 60530.4889857418],
    [0.00000000717, 5.18767638446, 2388.8940204492],
    [0.00000000978, 0.59173716418, 38.1330356378],
    [0.00000000739, 2.06641449411, 6836.6452528338],
    [0.00000000873, 4.12869387929, 20452.8694122218],
    [0.00000000898, 3.60826303131, 5884.9268465832],
    [0.00000000687, 3.79981260379, 1052.2683831884],
    [0.00000000891, 0.25903142475, 245.8316462294],
    [0.0000000068, 2.48130351647, 10021.8372800994],
    [0.00000000841, 2.99665171314, 20995.3929664494],
    [0.0000000075, 5.22711381689, 5650.2921106782],
    [0.00000000664, 2.30847352112, 65697.55772473979],
    [0.00000000768, 2.35223657885, 4171.4255366138],
    [0.00000000701, 0.2231990629, 5481.2549188676],
    [0.00000000863, 0.78968227278, 149144.46708624958],
    [0.00000000848, 2.81268690221, 24492.40611365159],
    [0.00000000607, 3.51976732218, 4274.5183108324],
    [0.0000000059, 0.40860180786, 3104.9300594238],
    [0.0000000059, 1.63135589493, 3496.032826134],
    [0.00000000582, 3.44599025927, 10454.5013866052],
    [0.00000000648, 5.36909668869, 19800.9459562248],
    [0.00000000571, 6.1152856026, 206.1855484372],
    [0.00000000577, 3.8549295142, 26709.6469424134],
    [0.00000000609, 6.11919048751, 10440.2742926036],
    [0.00000000654, 2.28656015233, 220.4126424388],
    [0.00000000583, 5.29593061044, 12139.5535091068],
    [0.00000000735, 5.3012059102, 46386.9937433112],
    [0.00000000689, 4.35331945671, 13119.72110282519],
    [0.00000000717, 4.43118440382, 61306.0115970658],
    [0.00000000519, 0.39775147377, 19402.7969528166],
    [0.00000000536, 4.53658403326, 4157.1984426122],
    [0.00000000561, 4.60721352077, 27043.5028831828],
    [0.00000000618, 0.38242047434, 23539.7073863328],
    [0.00000000696, 3.4276816368, 64460.6986819614],
    [0.00000000627, 5.56413422947, 24383.0791084414],
    [0.00000000539, 5.97066263641, 15720.8387848784],
    [0.00000000526, 0.95282075493, 6309.3741697912],
    [0.00000000616, 3.87589572013, 10344.2950653858],
    [0.0000000062, 3.37619845482, 17996.0311682222],
    [0.00000000485, 3.90809903529, 9779.1086761254],
    [0.00000000465, 6.01642519997, 949.1756089698],
    [0.0000000048, 0.11134171893, 28237.2334593894],
    [0.00000000437, 5.69640970075, 104351.61256629678],
    [0.00000000423, 4.4980657205, 20199.094959633],
    [0.00000000441, 4.72475823193, 21424.4666443034],
    [0.00000000535, 0.44060988531, 50317.2034395308],
    [0.00000000492, 4.78939616087, 23937.856389741],
    [0.00000000511, 5.85563854239, 65236.2212932854],
    [0.00000000407, 1.663502797, 9411.4646150872],
    [0.00000000468, 6.20124892488, 16062.1845261168],
    [0.00000000442, 5.53086649567, 34520.3093093808],
    [0.00000000457, 0.71491494355, 28313.288804661],
    [0.00000000347, 3.03534084008, 1692.1656695024],
    [0.00000000485, 4.84967116718, 68390.90837818099],
    [0.00000000362, 3.98944454208, 7875.6718636242],
    [0.00000000411, 2.20450565062, 26482.1708096244],
    [0.0000000033, 2.26537614866, 22345.2603761082],
    [0.00000000446, 0.95532524763, 10419.9862835076],
    [0.00000000325, 3.47084742587, 6438.4962494256],
    [0.00000000356, 4.12339845036, 16737.5772365966],
    [0.00000000435, 5.01330132168, 846.0828347512],
    [0.00000000337, 5.75076616001, 12721.572099417],
    [0.00000000372, 1.00159121951, 22743.4093795164],
    [0.00000000337, 5.20598360934, 30639.856638633],
    [0.00000000432, 5.26686135384, 6206.8097787158],
    [0.00000000324, 1.80843687355, 4487.8174062704],
    [0.0000000034, 5.224245041, 4377.611085051],
    [0.0000000032, 3.08708728278, 853.196381752],
    [0.00000000305, 3.16030946855, 15141.390794312],
    [0.00000000295, 2.8053958154, 17267.26820169119],
    [0.0000000029, 3.6144290239, 5746.271337896],
    [0.00000000308, 4.50248571682, 433.7117378768],
    [0.00000000389, 1.86315356508, 54247.4131357504],
    [0.00000000322, 3.46967977638, 14.2270940016],
    [0.00000000341, 4.02336433306, 11499.6562227928],
    [0.00000000302, 5.38111906389, 17253.04110768959],
    [0.00000000327, 2.44399833706, 5636.0650166766],
    [0.00000000364, 0.99688214422, 69166.430989505],
    [0.00000000281, 4.74626207506, 5760.4984318976],
    [0.00000000265, 0.74240497843, 5331.3574437408],
    [0.00000000337, 2.14763165955, 32243.4985008806],
    [0.00000000334, 6.23974258116, 27707.5424942948],
    [0.0000000035, 3.07748291487, 17157.0618804718],
    [0.00000000296, 2.39041711752, 10239.5838660108],
    [0.00000000257, 4.32742603152, 35579.69123957],
    [0.0000000032, 1.76834224495, 19004.6479494084],
    [0.00000000255, 3.107918906, 18451.07854656599],
    [0.00000000252, 0.98637636634, 1596.1864422846],
    [0.00000000277, 3.10367648872, 13341.6743113068],
    [0.00000000355, 0.91871781243, 135.0650800354],
    [0.00000000243, 1.57306127734, 19651.048481098],
    [0.00000000339, 6.27163624965, 72321.1180744006],
    [0.0000000033, 1.57569861965, 65857.55281669598],
    [0.00000000327, 4.19832248687, 12352.8526045448],
    [0.00000000257, 3.18451075643, 4797.0957289262],
    [0.00000000285, 1.69492001631, 5540.0857894588],
    [0.0000000032, 4.61255095009, 53131.406024757],
    [0.00000000302, 1.33411907842, 16723.350142595],
    [0.0000000023, 4.93393524613, 21393.5419698576],
    [0.00000000278, 0.28174927075, 26880.3198130326],
    [0.00000000272, 3.49844460921, 23550.34405168259],
    [0.0000000024, 1.31137842735, 15664.03552270859],
    [0.00000000237, 0.45311957904, 23141.5583829246],
    [0.00000000227, 3.35982205624, 5017.508371365],
    [0.00000000267, 4.02604040998, 29424.634232916],
    [0.00000000272, 0.6019102108, 23536.11695768099],
    [0.00000000222, 4.18932670035, 12964.300703391],
    [0.00000000218, 5.31090461236, 9380.9596727172],
    [0.00000000208, 4.14084648782, 25287.7237993998],
    [0.00000000283, 3.28565649855, 58177.62283197],
    [0.00000000262, 3.03754237117, 3097.88382272579],
    [0.00000000209, 5.14152047511, 2648.454825473],
    [0.0000000022, 0.25359599654, 5436.9930152402],
    [0.00000000216, 1.03745324555, 15508.6151232744],
    [0.00000000233, 4.1792227653, 316.3918696566],
    [0.00000000204, 5.69722961883, 10557.5941608238],
    [0.00000000209, 0.78142532872, 5010.3948243642],
    [0.00000000259, 2.42128354611, 73096.64068572459],
    [0.00000000213, 2.07909571442, 38.0276726358],
    [0.0000000025, 3.57928230027, 36173.7081971002],
    [0.00000000191, 0.47214418257, 24336.0053931492],
    [0.00000000196, 0.40594681978, 34570.0663348526],
    [0.00000000215, 2.74266814614, 3.9321532631],
    [0.00000000256, 2.76855924614, 6915.8595893046],
    [0.00000000232, 3.77975163181, 2787.0430238574],
    [0.00000000197, 4.54278315268, 17271.8840075264],
    [0.00000000231, 2.48616317266, 6058.7310542895],
    [0.00000000179, 0.92741900769, 20760.4270331914],
    [0.00000000233, 3.26011807485, 1581.959348283],
    [0.00000000218, 3.62140089632, 21947.1113727],
    [0.00000000234, 4.3308083262, 18635.9284545362],
    [0.00000000188, 1.82044597578, 3531.5282502998],
    [0.00000000237, 1.41039249505, 76251.32777062019],
    [0.00000000168, 5.41062751379, 640.8776073822],
    [0.00000000227, 3.55090777628, 24279.10701821359],
    [0.00000000197, 4.84558224412, 24356.7807886416],
    [0.00000000193, 3.82715566541, 14169.7935622304],
    [0.00000000199, 3.41484863181, 9814.6041002912],
    [0.00000000212, 1.24754117709, 1478.8665740644],
    [0.00000000173, 5.82662786304, 10818.1352869158],
    [0.00000000211, 2.94600749724, 25685.872802808],
    [0.00000000184, 2.07244348642, 956.2891559706],
    [0.00000000167, 2.86368489825, 3744.8273457378],
    [0.00000000172, 3.15647686076, 18606.4989460002],
    [0.00000000185, 4.65709479227, 10873.9860304804],
    [0.00000000174, 0.96801832719, 46848.3301747656],
    [0.00000000217, 2.72636614871, 377.3736079158],
    [0.00000000156, 0.86840648323, 12323.4230960088],
    [0.00000000154, 5.36005488594, 91785.46086631398],
    [0.00000000158, 2.27982796637, 5327.4761083828],
    [0.0000000018, 5.04746623332, 11080.1715789176],
    [0.00000000206, 4.70812207876, 62107.8325281896],
    [0.00000000179, 0.51231676553, 263.0839233728],
    [0.00000000149, 2.291439181, 27278.4688164408],
    [0.00000000144, 1.1350676741, 31441.6775697568],
    [0.00000000183, 0.71209683454, 40803.3851593722],
    [0.00000000163, 1.8502078117, 24705.70520908959],
    [0.00000000186, 5.01001679228, 40103.9178933198],
    [0.00000000146, 5.72913602415, 27511.4678735372],
    [0.00000000169, 5.84639066532, 32367.0976562076],
    [0.00000000185, 3.84565627538, 77026.8503819442],
    [0.00000000136, 1.57809381851, 8858.3149443206],
    [0.00000000133, 2.70021829914, 35371.8872659764],
    [0.00000000151, 2.03120150527, 29822.7832363242],
    [0.0000000013, 6.02630815765, 28230.18722269139],
    [0.0000000014, 5.98445746307, 21202.093703746],
    [0.00000000145, 2.23925630713, 3641.7345715192],
    [0.00000000141, 3.8613865577, 19804.8272915828],
    [0.00000000167, 2.23978886098, 6805.6532680852],
    [0.00000000173, 6.19554658399, 32370.9789915656],
    [0.00000000129, 2.57956291251, 8273.8208670324],
    [0.0000000017, 3.82784254159, 224.3447957019],
    [0.00000000129, 4.38730624406, 16207.886271502],
    [0.00000000136, 0.96732944756, 16193.65917750039],
    [0.00000000129, 0.20884580303, 28286.9904848612],
    [0.00000000147, 5.47777140724, 24889.5747959916],
    [0.00000000124, 5.69618464715, 9910.583327509],
    [0.00000000166, 2.83231220456, 80181.53746683979],
    [0.00000000164, 0.43253177893, 10660.6869350424],
    [0.00000000135, 3.40615869408, 9924.8104215106],
    [0.00000000119, 4.90437881411, 17370.3609759098],
    [0.00000000162, 3.56321636256, 1.4844727083],
    [0.00000000152, 3.7550702466, 23581.2581773176],
    [0.00000000129, 0.45020633161, 419.4846438752],
    [0.00000000154, 2.29034651828, 45892.73043315699],
    [0.00000000115, 0.22354743671, 1375.7737998458],
    [0.00000000134, 5.26305889133, 18100.00325845],
    [0.00000000116, 4.21137412794, 39302.096962196],
    [0.00000000115, 2.70980059431, 15265.8865193004],
    [0.00000000158, 2.69025143951, 26084.0218062162],
    [0.00000000123, 5.00307350776, 21548.9623692918],
    [0.00000000155, 0.26428715611, 266.6070417218],
    [0.00000000118, 3.97403150803, 3903.9113764198],
    [0.00000000115, 1.72408970821, 32217.2001810808],
    [0.0000000014, 4.87603176556, 6040.3472460174],
    [0.00000000123, 1.57870110965, 394.6258850592],
    [0.0000000015, 6.13055344706, 66038.04222440919],
    [0.00000000154, 5.29311713103, 18699.6643528396],
    [0.0000000011, 2.2618467196, 3958.1264411758],
    [0.00000000109, 2.46409404658, 130439.51570787099],
    [0.0000000011, 4.1088316198, 30220.9322397324],
    [0.00000000117, 4.44405640157, 2699.7348193176],
    [0.00000000111, 2.59141349664, 1265.5674786264],
    [0.00000000121, 0.89664076874, 401.6721217572],
    [0.0000000011, 3.14926828372, 36147.4098773004],
    [0.00000000139, 0.15677437717, 44034.1275895394],
    [0.00000000123, 1.70348819188, 6709.6740408674],
    [0.00000000147, 3.8459309597, 1293.4842235826],
    [0.00000000118, 4.81863400378, 29026.48522950779],
    [0.00000000106, 1.82185776, 38500.2760310722],
    [0.00000000104, 5.93840355385, 24602.61243487099],
    [0.00000000111, 1.8645768869, 5237.9210138038],
    [0.00000000101, 6.14087554304, 5959.570433334],
    [0.00000000102, 4.54932927423, 40077.61957352],
    [0.00000000105, 2.05472864376, 3956.5080160194],
    [0.000000001, 1.87301780656, 30355.9973197678],
    [0.00000000131, 5.26999840613, 80957.06007816379],
    [0.00000000097, 4.74417280368, 10027.9031957292],
    [0.00000000098, 5.69542268666, 43232.3066584156],
    [0.00000000114, 3.81019781583, 17686.7528455664],
    [0.00000000093, 3.91616530165, 742.9900605326],
    [0.00000000089, 6.26815057148, 11513.8833167944],
    [0.0000000012, 4.92944027519, 28628.3362260996],
    [0.00000000117, 2.89270694592, 13362.4497067992],
    [0.00000000088, 3.78965716913, 23020.65308658799],
    [0.00000000124, 3.86093014198, 2636.725472637],
    [0.00000000105, 1.3817226328, 35309.5610794992],
    [0.00000000098, 5.86153851865, 27177.8515292002],
    [0.00000000091, 5.94669770746, 44007.8292697396],
    [0.00000000088, 0.9017005479, 6702.5604938666],
    [0.00000000097, 3.21457904276, 283.8593188652],
    [0.00000000121, 5.2360946106, 28.4491874678],
    [0.00000000105, 2.06915605316, 18415.51581209739],
    [0.00000000105, 4.95550345912, 18429.742906099],
    [0.00000000089, 0.55733547455, 31968.9486527994],
    [0.00000000091, 4.17133072864, 11.0457002639],
    [0.00000000092, 0.24274645518, 23006.42599258639],
    [0.00000000085, 4.55199303522, 18208.349942592],
    [0.00000000094, 1.43336739495, 1573.8204240988],
    [0.00000000094, 0.75126272849, 1580.8666607968],
    [0.00000000117, 4.25421023098, 84111.7471630594],
    [0.00000000099, 1.05493331341, 27832.0382192832],
    [0.00000000116, 1.15474166812, 161710.6187862324],
    [0.00000000097, 0.41497781905, 22030.2129546696],
    [0.00000000114, 4.98056523539, 16097.6799502826],
    [0.0000000008, 1.64142025464, 31172.650645983],
    [0.0000000011, 1.26976859634, 69968.2519206288],
    [0.00000000088, 0.56821721639, 24491.4257925834],
    [0.00000000097, 0.56888525012, 95.9792272178],
    [0.000000001, 2.59153464159, 4598.0237274898],
    [0.00000000111, 4.68577378393, 661.232926781],
    [0.00000000093, 4.28155338093, 17892.93839400359],
    [0.00000000104, 1.58602783036, 47964.337285759],
    [0.000000001, 4.01381430202, 13095.8426650774],
    [0.0000000008, 4.31002128696, 20894.77567920879],
    [0.00000000088, 4.49858325451, 24065.80792277559],
    [0.00000000081, 0.88095047565, 47162.5163546352],
    [0.00000000094, 5.45998704363, 11933.3679606696],
    [0.00000000078, 5.92384207213, 33163.395663024],
    [0.00000000094, 0.38751984044, 40273.6941942776],
    [0.00000000094, 2.57363973364, 11919.140866668],
    [0.0000000009, 5.30357694948, 5227.6260730653],
    [0.0000000009, 2.0910227188, 5219.7617665391],
    [0.00000000095, 0.43175285649, 8982.810669309],
    [0.00000000105, 4.44846678366, 6172.869528772],
    [0.00000000079, 1.06374370822, 47938.0389659592],
    [0.00000000079, 3.73839406628, 32765.2466596158],
    [0.00000000078, 4.69944152155, 7872.1487452752],
    [0.00000000101, 4.21634686803, 22910.44676536859],
    [0.00000000101, 5.77012112704, 4583.7966334882],
    [0.00000000092, 5.61681959352, 5729.506447149],
    [0.000000001, 5.86489932644, 11609.8625440122],
    [0.00000000071, 5.566803363, 5113.4875985828],
    [0.00000000076, 2.3717601475, 3185.1920272656],
    [0.00000000071, 4.10956032742, 3627.5074775176],
    [0.00000000094, 0.41112493145, 84887.2697743834],
    [0.00000000072, 1.37707074959, 13760.5987102074],
    [0.00000000096, 0.47288646999, 5966.6839803348],
    [0.00000000069, 3.64335732249, 2221.856634597],
    [0.00000000077, 5.11734599633, 59414.4818747484],
    [0.00000000094, 5.92201215376, 17473.4537501284],
    [0.00000000079, 0.91539809724, 25132.3033999656],
    [0.00000000066, 2.51023661842, 34911.412076091],
    [0.00000000076, 0.83270020063, 142861.39123625818],
    [0.00000000065, 4.41535827709, 11216.284290324],
    [0.00000000063, 0.11190371317, 21150.8133658836],
    [0.00000000064, 0.36579489827, 323.5054166574],
    [0.00000000065, 5.10958922237, 22490.9621214934],
    [0.00000000066, 2.46760821758, 51868.2486621788],
    [0.00000000062, 6.25663329564, 2575.2390943292],
    [0.00000000085, 3.68460097749, 30562.182868205],
    [0.00000000065, 2.34017025611, 51092.7260508548],
    [0.00000000086, 0.98483776889, 72936.23331633979],
    [0.00000000072, 2.84810889413, 3428.4354760812],
    [0.00000000061, 0.84211264965, 33990.6183442862],
    [0.00000000067, 5.53601884067, 5209.4668258006],
    [0.00000000063, 0.70777053701, 4384.7246320518],
    [0.00000000071, 1.84932706584, 25960.4226508892],
    [0.0000000006, 3.58125305475, 40565.2543247742],
    [0.00000000069, 0.67840995168, 31570.7996493912],
    [0.00000000073, 1.59803952076, 735.8765135318],
    [0.00000000082, 5.67608849032, 88041.956859279],
    [0.0000000007, 6.00737924936, 18216.443810661],
    [0.0000000008, 2.6921394233, 73898.46161684839],
    [0.00000000078, 3.01467819829, 51894.5469819786],
    [0.00000000082, 2.17296134667, 77003.83841956219],
    [0.0000000006, 5.42024516187, 7834.1210726394],
    [0.00000000064, 0.48474335861, 6819.8803620868],
    [0.00000000062, 2.55006492387, 29062.5130961852],
    [0.00000000057, 2.7844869315, 2008.557539159],
    [0.00000000067, 1.13912524541, 6076.8903015542],
    [0.00000000065, 2.89140630309, 4708.2300487092],
    [0.0000000006, 3.77609072302, 647.0108333148],
    [0.00000000066, 2.92009442932, 30774.5016425748],
    [0.00000000062, 2.41855812597, 27433.88921587499],
    [0.00000000057, 5.95453093738, 15906.7641266826],
    [0.00000000069, 0.19625471758, 11720.0688652316],
    [0.00000000056, 5.44861073174, 41333.0761244668],
    [0.00000000063, 5.98679419299, 5.5229243074],
    [0.00000000069, 2.27110058509, 11925.2740926006],
    [0.0000000006, 6.28174858517, 5642.1982426092],
    [0.00000000064, 2.66518633293, 16627.3709153772],
    [0.00000000064, 3.19761295619, 38252.0245027908],
    [0.00000000059, 4.1812756705, 15.252471185],
    [0.00000000055, 2.86414958468, 10241.2022911672],
    [0.00000000068, 4.55454820795, 10550.480613823],
    [0.00000000074, 4.34088171093, 3684.3780499902],
    [0.00000000059, 3.61958583224, 66653.15746634839],
    [0.00000000053, 0.16784259275, 792.7748884674],
    [0.00000000054, 1.45259256222, 36105.8590863156],
    [0.00000000074, 1.48043873547, 1861.202861313],
    [0.00000000053, 5.85083689811, 2301.58581590939],
    [0.00000000073, 2.99245704242, 11293.4706743556],
    [0.00000000054, 3.52305553111, 14477.3511832],
    [0.00000000054, 3.87469497533, 55798.4583583984],
    [0.00000000063, 2.42741809557, 5333.9002410216],
    [0.00000000071, 3.08360461172, 2069.0068349066],
    [0.00000000067, 1.8354065873, 88817.479470603],
    [0.00000000059, 4.62519959873, 29303.7289365794],
    [0.0000000005, 6.21970671375, 4480.7038592696],
    [0.00000000049, 3.55625076445, 34115.1140692746],
    [0.00000000052, 3.22786480622, 42430.4857272918],
    [0.00000000052, 3.79309677908, 55022.9357470744],
    [0.00000000048, 4.42160860356, 37853.8754993826],
    [0.00000000047, 1.95602447425, 24093.2767891752],
    [0.00000000059, 1.7388526645, 29289.5018425778],
    [0.00000000047, 2.88855111787, 5547.1993364596],
    [0.00000000053, 3.18288692619, 5422.7659212386],
    [0.00000000049, 3.49607928383, 7886.717712239],
    [0.0000000005, 1.51901640776, 79219.3091663312],
    [0.00000000047, 1.29219238659, 170.6728706192],
    [0.0000000006, 1.05374729771, 33460.92737919159],
    [0.00000000053, 3.28296931281, 29890.6323471088],
    [0.00000000061, 0.39351416081, 491.6632924588],
    [0.00000000062, 1.645393208, 4176.041342449],
    [0.00000000052, 5.76896911361, 799.8211251654],
    [0.00000000058, 4.44279775993, 55824.7566781982],
    [0.00000000045, 3.81445833552, 16840.67001081519],
    [0.00000000047, 2.9885597472, 9284.9131351966],
    [0.00000000058, 4.11448274333, 77828.671313068],
    [0.00000000044, 5.76099256536, 533.2140834436],
    [0.00000000051, 4.55046086014, 15567.988985188],
    [0.00000000052, 4.11092873266, 14867.73751589219],
    [0.00000000058, 0.814761637, 91972.1665554986],
    [0.00000000044, 5.28440682891, 59728.668054618],
    [0.00000000058, 0.78060299408, 17429.3614528576],
    [0.00000000041, 2.73564364757, 14611.6998292174],
    [0.00000000057, 4.50609274089, 5999.2165311262],
    [0.0000000004, 0.84915062931, 38654.05484155699],
    [0.0000000004, 5.37394428408, 35707.7100829074],
    [0.00000000041, 2.75905632996, 34513.2630726828],
    [0.00000000043, 4.27124331574, 30376.3526391666],
    [0.00000000041, 5.12848520618, 664.75604513],
    [0.00000000039, 4.04691076402, 11396.5634485742],
    [0.0000000004, 0.58534017054, 11764.330768859],
    [0.0000000004, 3.47746502923, 4900.1885031448],
    [0.00000000043, 4.79112605511, 33716.9650658664],
    [0.00000000038, 2.12342255215, 117873.36400788819],
    [0.00000000041, 5.24162103565, 58953.145443294],
    [0.00000000037, 4.39757488771, 4811.3228229278],
    [0.0000000004, 1.83659562382, 8584.6616659008],
    [0.00000000041, 2.60103484287, 4267.4047638316],
    [0.00000000044, 3.2080119116, 7445.5505543992],
    [0.00000000036, 3.91012961105, 18312.42303787879],
    [0.0000000004, 2.07287807099, 3215.1363806432],
    [0.00000000046, 1.16988162456, 8671.9698704406],
];

const H1: &[Term] = &[
    [0.00062029655, PI, 0.0],
    [0.00000026631, 0.50260243452, 775.522611324],
    [0.00000021214, 2.00566682331, 1059.3819301892],
    [0.00000019195, 2.58846455447, 4694.0029547076],
    [0.00000008642, 1.9618222371, 7.1135470008],
    [0.0000000768, 3.041447046, 796.2980068164],
    [0.00000006469, 4.06548157609, 3154.6870848956],
    [0.00000005154, 2.15924623854, 4164.311989613],
    [0.00000004073, 1.6225234538, 1194.4470102246],
    [0.00000004073, 1.93158131461, 4705.7323075436],
    [0.0000000339, 2.81176730222, 1589.0728952838],
    [0.00000002877, 3.75537344378, 10447.3878396044],
    [0.0000000316, 0.7681066381, 5216.5803728014],
    [0.00000002798, 3.37016489922, 1748.016413067],
    [0.00000003038, 0.31059961635, 5230.807466803],
    [0.00000002612, 1.96973140049, 2146.1654164752],
    [0.00000002698, 5.4890452281, 7084.8967811152],
    [0.00000003042, 4.31548741954, 5753.3848848968],
    [0.00000002649, 0.34964497495, 801.8209311238],
    [0.00000001869, 1.54682178531, 529.6909650946],
    [0.0000000183, 4.45483100532, 5643.1785636774],
    [0.00000002315, 2.70126802277, 155.4203994342],
    [0.00000001681, 2.79124007809, 17260.1546546904],
    [0.00000001674, 6.1754894419, 951.7184062506],
    [0.00000002228, 4.77217880274, 1349.8674096588],
    [0.0000000151, 4.8889681112, 3738.761430108],
    [0.0000000155, 0.63264849504, 11015.1064773348],
    [0.00000001404, 1.29644492931, 553.5694028424],
    [0.00000001358, 2.87618318212, 6812.766815086],
    [0.00000001776, 4.14272810883, 26.2983197998],
    [0.00000001526, 3.42359952092, 8635.9420037632],
    [0.00000001782, 0.21606723381, 1592.5960136328],
    [0.00000001331, 0.4705553373, 11506.7697697936],
    [0.00000001217, 5.50773076501, 398.1490034082],
    [0.00000001263, 3.47492236865, 536.8045120954],
    [0.00000001195, 3.95034263155, 522.5774180938],
    [0.00000001039, 3.47198519231, 4136.9104335162],
    [0.00000000968, 5.22656216735, 4690.4798363586],
    [0.00000001259, 3.03985042262, 3930.2096962196],
    [0.00000001001, 2.0558931851, 14945.3161735544],
    [0.00000000982, 0.28044372997, 4686.8894077068],
    [0.00000000923, 3.85221598175, 5088.6288397668],
    [0.00000000886, 2.67226919623, 426.598190876],
    [0.00000000952, 3.32211074273, 9917.6968745098],
    [0.00000000804, 0.73503250858, 4701.1165017084],
    [0.00000000898, 1.72847660602, 3634.6210245184],
    [0.00000000731, 5.09330722637, 1990.745017041],
    [0.00000000752, 3.95849168568, 3128.3887650958],
    [0.00000000662, 5.31865548822, 242.728603974],
    [0.00000000679, 3.47875380638, 18875.525869774],
    [0.00000000642, 4.92013704361, 5223.6939198022],
    [0.00000000636, 4.76082547281, 12566.1516999828],
    [0.00000000566, 5.05243635568, 1066.49547719],
    [0.00000000549, 1.81701640782, 639.897286314],
    [0.00000000519, 0.80588912081, 7632.9432596502],
    [0.00000000503, 5.21752675177, 5429.8794682394],
    [0.00000000691, 0.3376525618, 4292.3308329504],
    [0.00000000472, 4.86403721626, 16200.7727245012],
    [0.00000000526, 1.94683660218, 10969.9652576982],
    [0.00000000515, 1.45951461974, 10984.1923516998],
    [0.00000000461, 2.36075708879, 16730.4636895958],
    [0.00000000457, 5.75745908549, 8031.0922630584],
    [0.0000000045, 5.3175815124, 7079.3738568078],
    [0.00000000474, 4.90132420341, 22805.7355659936],
    [0.00000000425, 3.95950839064, 23013.5395395872],
    [0.00000000421, 1.73726125805, 3894.1818295422],
    [0.00000000412, 3.42001868759, 2118.7638603784],
    [0.00000000538, 2.06140300845, 4535.0594369244],
    [0.00000000381, 5.14038022299, 7058.5984613154],
    [0.00000000363, 4.28707096856, 2942.4634232916],
    [0.00000000438, 0.31794062716, 10977.078804699],
    [0.0000000034, 0.34844014062, 24072.9214697764],
    [0.00000000419, 1.56650054237, 4732.0306273434],
    [0.00000000311, 2.67590033242, 10575.4066829418],
    [0.00000000304, 0.51079279677, 6681.2248533996],
    [0.00000000336, 0.04047635771, 26735.9452622132],
    [0.00000000335, 3.38253584747, 5849.3641121146],
    [0.00000000284, 0.07020353244, 10988.808157535],
    [0.00000000357, 2.56737986852, 11790.6290886588],
    [0.0000000029, 3.68734518951, 2388.8940204492],
    [0.00000000382, 2.18888887183, 7234.794256242],
    [0.00000000383, 4.09264734425, 15720.8387848784],
    [0.0000000031, 2.93480948896, 5863.5912061162],
    [0.00000000308, 1.08148706261, 17782.7320727842],
    [0.00000000291, 0.67288117894, 17796.9591667858],
    [0.00000000351, 5.56054536294, 19651.048481098],
    [0.00000000249, 0.65350386862, 4933.2084403326],
    [0.00000000236, 1.3002030114, 14919.0178537546],
    [0.00000000236, 3.13915916788, 3496.032826134],
    [0.00000000234, 3.58347072679, 6836.6452528338],
    [0.00000000248, 1.40937453287, 10973.55568635],
    [0.000000003, 0.72656984345, 23581.2581773176],
    [0.0000000025, 1.16209170968, 6069.7767545534],
    [0.0000000024, 1.46261869335, 30666.1549584328],
    [0.00000000218, 5.74492964768, 955.5997416086],
    [0.00000000258, 6.1345500261, 7860.4193924392],
    [0.00000000209, 0.48810387561, 10213.285546211],
    [0.00000000221, 5.28140427768, 213.299095438],
    [0.00000000216, 2.8099546935, 8662.240323563],
    [0.00000000193, 4.55503197432, 13517.8701062334],
    [0.00000000201, 5.11262602579, 18319.5365848796],
    [0.00000000202, 3.35952882094, 7342.4577801806],
    [0.00000000197, 2.59692816988, 18849.2275499742],
    [0.00000000207, 4.46315417022, 15671.0817594066],
    [0.00000000247, 2.16727271682, 27511.4678735372],
    [0.0000000019, 5.85905072677, 20426.571092422],
    [0.00000000198, 1.45094301942, 10440.2742926036],
    [0.00000000247, 3.90685310396, 7477.522860216],
    [0.00000000191, 6.06178494156, 4157.1984426122],
    [0.00000000183, 4.81893705265, 18209.33026366019],
    [0.00000000242, 4.04316459696, 10177.2576795336],
    [0.00000000201, 4.34997208464, 52175.8062831484],
    [0.00000000242, 1.07853582068, 1577.3435424478],
    [0.00000000193, 0.58718839963, 220.4126424388],
    [0.00000000182, 1.87246958303, 14143.4952424306],
    [0.00000000174, 1.24041687631, 206.1855484372],
    [0.00000000158, 5.32101873334, 11712.9553182308],
    [0.00000000173, 2.88460370767, 34596.3646546524],
    [0.00000000165, 3.29302070005, 18073.7049386502],
    [0.0000000019, 2.89325417018, 9388.0059094152],
    [0.00000000153, 0.44141449402, 6496.3749454294],
    [0.00000000199, 3.60332373593, 31441.6775697568],
    [0.00000000174, 5.63063441958, 1052.2683831884],
    [0.00000000153, 1.68315680642, 10454.5013866052],
    [0.00000000153, 5.43127621749, 9779.1086761254],
    [0.00000000181, 3.60944089648, 2352.8661537718],
    [0.00000000142, 2.85166954338, 4804.209275927],
    [0.00000000149, 3.55047266843, 22483.84857449259],
    [0.00000000154, 0.63942117228, 4171.4255366138],
    [0.00000000144, 4.71516266073, 22003.9146348698],
    [0.0000000014, 4.0917323475, 12592.4500197826],
    [0.0000000014, 4.00003888273, 22779.4372461938],
    [0.00000000143, 3.62616956479, 6283.0758499914],
    [0.00000000129, 4.98269063188, 6438.4962494256],
    [0.0000000016, 5.90114406179, 13119.72110282519],
    [0.00000000122, 0.16224284026, 16460.33352952499],
    [0.00000000157, 5.0365330046, 35371.8872659764],
    [0.00000000132, 1.14100550522, 3340.6124266998],
    [0.0000000014, 3.38325936545, 13916.0191096416],
    [0.00000000119, 2.49679141592, 7875.6718636242],
    [0.00000000158, 0.55787321045, 5884.9268465832],
    [0.00000000123, 4.22449654907, 5636.0650166766],
    [0.00000000115, 2.32813836765, 9623.6882766912],
    [0.00000000157, 1.64388115739, 1551.045222648],
    [0.00000000112, 2.87731570336, 110.2063212194],
    [0.00000000125, 4.30644879054, 38526.574350872],
    [0.00000000153, 3.84793522871, 5650.2921106782],
    [0.00000000119, 6.13743205649, 25934.1243310894],
    [0.00000000109, 3.91270207935, 640.8776073822],
    [0.00000000107, 2.45461353608, 5120.6011455836],
    [0.00000000112, 0.00220832013, 8429.2412664666],
    [0.00000000116, 0.96923852226, 10021.8372800994],
    [0.00000000107, 2.76203723887, 433.7117378768],
    [0.00000000108, 5.52925725921, 5331.3574437408],
    [0.00000000104, 5.99205343017, 2544.3144198834],
    [0.00000000109, 1.85189453488, 11371.7046897582],
    [0.00000000116, 4.41746905783, 3.523118349],
    [0.00000000106, 0.99776245926, 12721.572099417],
    [0.000000001, 5.40495505975, 16522.6597160022],
    [0.00000000098, 5.62906076951, 149.5631971346],
    [0.00000000097, 5.11997453705, 28766.924424484],
    [0.00000000096, 5.6350375036, 1596.1864422846],
    [0.00000000096, 1.05325422634, 853.196381752],
    [0.00000000123, 0.18469328697, 39302.096962196],
    [0.00000000126, 4.54249996522, 3097.88382272579],
    [0.00000000108, 6.02388443926, 11769.8536931664],
    [0.00000000099, 2.46312725331, 16737.5772365966],
    [0.0000000013, 1.29596105059, 3104.9300594238],
    [0.00000000094, 3.6948494163, 14314.1681130498],
    [0.00000000095, 5.4049618497, 26709.6469424134],
    [0.00000000119, 3.8004855624, 7238.6755916],
    [0.00000000095, 1.27503913903, 29864.334027309],
    [0.00000000093, 1.11481870662, 78263.70942472259],
    [0.00000000115, 0.14800761799, 16496.3613962024],
    [0.00000000094, 0.68085154993, 17253.04110768959],
    [0.00000000086, 0.54391279497, 9380.9596727172],
    [0.00000000108, 1.48023703923, 16062.1845261168],
    [0.00000000084, 3.95284706924, 20.7753954924],
    [0.00000000102, 2.76726174784, 2379.1644735716],
    [0.00000000111, 3.98981786775, 8827.3902698748],
    [0.00000000113, 2.28109800393, 2787.0430238574],
    [0.00000000111, 5.75322774599, 10419.9862835076],
    [0.00000000088, 4.4126492831, 5486.777843175],
    [0.00000000093, 1.29763217119, 5856.4776591154],
    [0.00000000091, 5.72817441859, 42456.7840470916],
    [0.00000000081, 1.48613913859, 29826.3063546732],
    [0.00000000088, 1.65960619411, 14712.317116458],
    [0.00000000079, 1.01786830133, 17267.26820169119],
    [0.00000000077, 2.06650815946, 19402.7969528166],
    [0.00000000078, 5.95536256669, 21954.15760939799],
    [0.00000000079, 5.8942042136, 11499.6562227928],
    [0.0000000009, 3.03039749722, 16723.350142595],
    [0.00000000074, 4.97680295198, 5326.7866940208],
    [0.00000000095, 1.61472834777, 43232.3066584156],
    [0.00000000074, 0.45890553919, 20452.8694122218],
    [0.00000000077, 5.53470594676, 17256.6315363414],
    [0.00000000083, 3.9859776765, 39609.6545831656],
    [0.0000000008, 1.80310428973, 23550.34405168259],
    [0.00000000085, 2.70713517612, 5507.5532386674],
    [0.00000000075, 2.84953823555, 15664.03552270859],
    [0.00000000075, 2.69491114236, 33794.5437235286],
    [0.00000000081, 2.27905620298, 23536.11695768099],
    [0.00000000068, 1.95520527364, 632.7837393132],
    [0.00000000066, 5.94670369439, 2699.7348193176],
    [0.00000000066, 3.54105951908, 17654.7805397496],
    [0.00000000066, 3.12944255778, 5760.4984318976],
    [0.00000000061, 2.38924526842, 12323.4230960088],
    [0.0000000006, 5.25939722803, 76.2660712756],
    [0.00000000066, 0.86660728407, 46386.9937433112],
    [0.00000000073, 3.3476677572, 19004.6479494084],
    [0.00000000082, 5.40384429799, 16858.4825329332],
    [0.00000000073, 3.0438014995, 47162.5163546352],
    [0.00000000059, 1.08952917665, 20199.094959633],
    [0.00000000061, 0.52427235335, 30639.856638633],
    [0.00000000058, 4.34095316662, 10818.1352869158],
    [0.00000000056, 1.81382581616, 24383.0791084414],
    [0.00000000075, 5.67239398024, 17789.845619785],
    [0.00000000058, 4.11419651133, 37724.7534197482],
    [0.00000000053, 1.0878102969, 8273.8208670324],
    [0.00000000054, 5.35326192318, 5746.271337896],
    [0.00000000067, 0.10107752334, 6040.3472460174],
    [0.00000000059, 4.15325230149, 9437.762934887],
    [0.00000000053, 4.7037979812, 18606.4989460002],
    [0.00000000049, 3.98762156343, 22345.2603761082],
    [0.00000000049, 3.06171531029, 4061.2192153944],
    [0.00000000049, 1.38932029879, 949.1756089698],
    [0.00000000048, 5.54514584805, 17996.0311682222],
    [0.00000000045, 4.23581831493, 15265.8865193004],
    [0.00000000047, 5.40589123608, 20597.2439630412],
    [0.00000000056, 4.47212593247, 51092.7260508548],
    [0.00000000048, 2.28813103467, 50317.2034395308],
    [0.0000000005, 1.18677927689, 19800.9459562248],
    [0.00000000043, 3.18188480791, 28313.288804661],
    [0.00000000045, 2.92628559156, 23141.5583829246],
    [0.00000000042, 3.77968575413, 12036.4607348882],
    [0.00000000042, 0.8329396728, 12139.5535091068],
    [0.00000000045, 5.5330822049, 41654.9631159678],
    [0.00000000043, 0.98048947831, 9910.583327509],
    [0.00000000043, 0.87516159952, 3185.1920272656],
    [0.00000000047, 5.21070971599, 1581.959348283],
    [0.0000000005, 5.2211445891, 21947.1113727],
    [0.00000000046, 1.56854657779, 5017.508371365],
    [0.00000000048, 5.55816016361, 13367.9726311066],
    [0.00000000044, 2.58568010879, 16193.65917750039],
    [0.00000000041, 2.75452349994, 12964.300703391],
    [0.00000000038, 3.88880463116, 2648.454825473],
    [0.00000000045, 2.89420936042, 5481.2549188676],
    [0.00000000038, 0.20162975553, 4487.8174062704],
    [0.00000000036, 4.46924826013, 4797.0957289262],
    [0.00000000038, 0.27763473613, 21548.9623692918],
    [0.00000000036, 0.75399979841, 65697.55772473979],
];

const H2: &[Term] = &[
    [0.00003382631, PI, 0.0],
    [0.00000001224, 5.0875828572, 775.522611324],
    [0.00000000855, 0.52056023144, 1059.3819301892],
    [0.00000000794, 3.85418550309, 4694.0029547076],
    [0.00000000549, 0.32510830985, 801.8209311238],
    [0.0000000055, 4.22311597721, 155.4203994342],
    [0.00000000315, 1.49722194594, 796.2980068164],
    [0.00000000319, 0.07538311662, 1194.4470102246],
    [0.00000000301, 3.32169597358, 4164.311989613],
    [0.00000000296, 5.76202277161, 3154.6870848956],
    [0.00000000277, 2.82106249636, 553.5694028424],
    [0.00000000263, 1.42463820914, 951.7184062506],
    [0.00000000261, 3.77888481811, 26.2983197998],
    [0.00000000218, 4.93382930576, 1748.016413067],
    [0.00000000261, 0.0330666327, 1349.8674096588],
    [0.00000000212, 1.47608977223, 1589.0728952838],
    [0.00000000185, 3.80175585777, 242.728603974],
    [0.00000000189, 0.23165465848, 4705.7323075436],
    [0.00000000209, 4.96298044138, 1592.5960136328],
    [0.00000000172, 3.74069570355, 5223.6939198022],
    [0.0000000012, 5.01545497285, 10447.3878396044],
    [0.00000000123, 0.90229612978, 7084.8967811152],
    [0.00000000115, 3.56529163885, 1990.745017041],
    [0.00000000148, 4.29565722354, 3128.3887650958],
    [0.00000000104, 3.58541574512, 2146.1654164752],
    [0.00000000092, 0.29030314004, 529.6909650946],
    [0.00000000081, 6.11752323792, 5643.1785636774],
    [0.00000000082, 1.93537488174, 4136.9104335162],
    [0.00000000075, 0.53033652695, 4690.4798363586],
    [0.00000000072, 4.35286655213, 17260.1546546904],
    [0.00000000092, 4.209202212, 5753.3848848968],
    [0.00000000069, 2.8317934552, 3634.6210245184],
    [0.00000000071, 2.32517774553, 11015.1064773348],
    [0.00000000087, 1.79568948798, 4732.0306273434],
    [0.0000000007, 3.90239570666, 398.1490034082],
    [0.0000000007, 1.68036356244, 8635.9420037632],
    [0.00000000066, 3.27546503016, 3894.1818295422],
    [0.0000000006, 3.31094545654, 3738.761430108],
    [0.00000000081, 1.89188200975, 4292.3308329504],
    [0.00000000056, 4.48368728813, 9917.6968745098],
    [0.00000000057, 2.16606642814, 2388.8940204492],
    [0.00000000054, 1.583696886, 6812.766815086],
    [0.00000000067, 0.95110132141, 1577.3435424478],
    [0.00000000067, 5.78424668728, 7058.5984613154],
    [0.00000000063, 0.53069237276, 4535.0594369244],
    [0.00000000046, 4.66771303072, 3496.032826134],
    [0.00000000043, 3.7603317517, 14945.3161735544],
    [0.0000000004, 0.7733724893, 5429.8794682394],
    [0.0000000004, 2.4254569296, 7632.9432596502],
    [0.00000000039, 5.41221961016, 4933.2084403326],
    [0.00000000038, 0.00002877847, 639.897286314],
    [0.00000000046, 4.01493531872, 11506.7697697936],
    [0.00000000037, 5.12896326235, 6836.6452528338],
];

const H3: &[Term] = &[
    [0.00000085101, 0.0, 0.0],
];

const H4: &[Term] = &[
    [0.0000000277, 0.0, 0.0],
];

const H5: &[Term] = &[
    [0.00000000047, PI, 0.0],
];

const Q0: &[Term] = &[
    [0.0000004699, 1.03836320801, 775.522611324],
    [0.0000003703, 2.58501310328, 1059.3819301892],
    [0.00000023828, 2.93938256767, 3930.2096962196],
    [0.00000014714, 4.46415660357, 7860.4193924392],
    [0.00000009899, 2.46044981348, 4705.7323075436],
    [0.00000009873, 1.94962975227, 529.6909650946],
    [0.00000008903, 3.5248856687, 3154.6870848956],
    [0.00000007864, 2.9023973011, 426.598190876],
    [0.00000009005, 5.16294437877, 12566.1516999828],
    [0.0000000797, 5.89298627379, 11790.6290886588],
    [0.0000000675, 3.88287479975, 8635.9420037632],
    [0.00000005196, 4.14011267868, 1577.3435424478],
    [0.00000004252, 2.99484359241, 1589.0728952838],
    [0.00000004395, 4.81752364842, 801.8209311238],
    [0.00000004735, 1.03635433956, 15720.8387848784],
    [0.00000004753, 0.95915716757, 337.8142631964],
    [0.00000003387, 0.17974491269, 398.1490034082],
    [0.00000003257, 2.18431581116, 7.1135470008],
    [0.00000003461, 1.8678539464, 20426.571092422],
    [0.00000003559, 4.04249274334, 11506.7697697936],
    [0.00000003022, 4.94608820141, 7084.8967811152],
    [0.00000003522, 2.74039504389, 5753.3848848968],
    [0.0000000288, 0.5301500091, 2352.8661537718],
    [0.00000002951, 2.46165174911, 19651.048481098],
    [0.00000002826, 0.78348256236, 213.299095438],
    [0.00000002235, 2.16151673769, 26.2983197998],
    [0.00000002059, 4.86022301407, 796.2980068164],
    [0.00000002408, 3.28968402495, 24356.7807886416],
    [0.000000022, 0.44064276298, 16496.3613962024],
    [0.00000002056, 1.69680348714, 4694.0029547076],
    [0.00000001893, 3.88615539065, 23581.2581773176],
    [0.00000001664, 4.71170013246, 28286.9904848612],
    [0.00000001653, 3.73404486705, 6812.766815086],
    [0.00000001468, 0.08362967076, 11015.1064773348],
    [0.00000001168, 2.5214756713, 6283.0758499914],
    [0.00000001544, 5.60656174344, 5507.5532386674],
    [0.00000001304, 6.02884397372, 3128.3887650958],
    [0.00000001149, 6.13351218331, 32217.2001810808],
    [0.00000000961, 1.83129690207, 19804.8272915828],
    [0.00000001004, 2.15954847152, 639.897286314],
    [0.00000001239, 5.31010625053, 27511.4678735372],
    [0.00000001002, 3.35687269371, 2942.4634232916],
    [0.00000000812, 1.50385719497, 14945.3161735544],
    [0.00000000778, 3.40797863485, 1194.4470102246],
    [0.00000000794, 1.2720585823, 36147.4098773004],
    [0.00000000872, 0.77455713818, 9437.762934887],
    [0.00000000821, 0.45045761066, 31441.6775697568],
    [0.00000000619, 0.04769580921, 2146.1654164752],
    [0.00000000587, 5.31646842279, 32370.9789915656],
    [0.00000000646, 3.60372591266, 10977.078804699],
    [0.00000000575, 4.65511631069, 2544.3144198834],
    [0.00000000535, 0.34553618886, 3738.761430108],
    [0.00000000651, 1.16699630648, 7058.5984613154],
    [0.0000000063, 6.23922508625, 4732.0306273434],
    [0.00000000638, 1.98648374744, 5223.6939198022],
    [0.00000000556, 1.2909846055, 4164.311989613],
    [0.0000000055, 2.69371531074, 40077.61957352],
    [0.00000000566, 5.18707330824, 17260.1546546904],
    [0.00000000511, 6.0452253996, 18319.5365848796],
    [0.00000000493, 5.0214324654, 5884.9268465832],
    [0.0000000055, 1.8736659406, 35371.8872659764],
    [0.00000000479, 2.92355948737, 18875.525869774],
    [0.00000000568, 2.21719169525, 13367.9726311066],
    [0.00000000456, 1.5276092992, 1748.016413067],
    [0.00000000455, 2.58783264445, 10988.808157535],
    [0.00000000382, 3.40713020737, 2118.7638603784],
    [0.00000000395, 1.92084855813, 3340.6124266998],
    [0.00000000365, 2.14598108072, 6681.2248533996],
    [0.00000000382, 4.11530016889, 44007.8292697396],
    [0.00000000323, 3.55808838694, 1551.045222648],
    [0.00000000348, 4.00767039642, 14919.0178537546],
    [0.00000000391, 3.65458468543, 17298.1823273262],
    [0.00000000371, 3.29660172388, 39302.096962196],
    [0.00000000282, 3.73512530393, 12139.5535091068],
    [0.00000000294, 4.34270689267, 22805.7355659936],
    [0.00000000295, 2.96655852466, 1349.8674096588],
    [0.00000000247, 0.1496749007, 5486.777843175],
    [0.00000000277, 2.94918206599, 10447.3878396044],
    [0.00000000288, 5.43856066918, 18849.2275499742],
    [0.00000000287, 1.37776811999, 8662.240323563],
    [0.00000000275, 1.98118153638, 1592.5960136328],
    [0.00000000253, 5.20823704865, 4136.9104335162],
    [0.00000000265, 5.53681588207, 47938.0389659592],
    [0.00000000255, 0.54645705613, 8827.3902698748],
    [0.0000000024, 3.51769016527, 10213.285546211],
    [0.00000000217, 3.96610829375, 9623.6882766912],
    [0.00000000228, 5.27900415202, 13095.8426650774],
    [0.00000000211, 1.81243836253, 5088.6288397668],
    [0.00000000276, 5.08853464662, 21228.3920235458],
    [0.0000000019, 4.39155618154, 951.7184062506],
    [0.00000000252, 4.71930249402, 43232.3066584156],
    [0.00000000209, 5.64562932543, 1066.49547719],
    [0.00000000181, 5.18248505707, 76.2660712756],
    [0.00000000243, 4.48856861076, 7342.4577801806],
    [0.00000000175, 4.87367475759, 45892.73043315699],
    [0.0000000021, 0.94249502595, 155.4203994342],
    [0.00000000183, 1.02165138938, 2379.1644735716],
    [0.00000000185, 5.76126519286, 26735.9452622132],
    [0.00000000185, 0.67507843008, 51868.2486621788],
    [0.0000000021, 2.70750667777, 1052.2683831884],
    [0.00000000192, 4.34940171949, 12036.4607348882],
    [0.00000000179, 0.56843804629, 22779.4372461938],
    [0.00000000198, 0.23691415185, 25158.6017197654],
    [0.00000000159, 0.73122090572, 7079.3738568078],
    [0.00000000143, 2.08509917181, 58458.88213313979],
    [0.0000000014, 1.94622525831, 8429.2412664666],
    [0.00000000162, 2.79946864955, 12592.4500197826],
    [0.00000000172, 6.14179511046, 47162.5163546352],
    [0.00000000141, 5.81028005712, 553.5694028424],
    [0.00000000142, 4.75677681987, 16730.4636895958],
    [0.00000000138, 2.48060869632, 955.5997416086],
    [0.00000000144, 2.36317443609, 11769.8536931664],
    [0.00000000142, 3.31718491451, 4690.4798363586],
    [0.00000000132, 0.24597170684, 149.5631971346],
    [0.00000000115, 1.33453134126, 15508.6151232744],
    [0.0000000015, 2.49215360246, 6069.7767545534],
    [0.00000000129, 2.09646083787, 55798.4583583984],
    [0.00000000118, 6.04684122333, 419.4846438752],
    [0.00000000143, 1.66675612272, 29088.811415985],
    [0.00000000107, 2.77976647349, 433.7117378768],
    [0.00000000108, 3.58093990296, 8031.0922630584],
    [0.00000000118, 5.43993183293, 9225.539273283],
    [0.00000000119, 0.89600886252, 30666.1549584328],
    [0.00000000112, 2.54904152327, 10021.8372800994],
    [0.0000000012, 0.85945609329, 632.7837393132],
    [0.00000000099, 0.87906844825, 3634.6210245184],
    [0.00000000099, 1.41472033674, 853.196381752],
    [0.00000000096, 0.56262609675, 1990.745017041],
    [0.00000000104, 4.99846318716, 5481.2549188676],
    [0.0000000011, 2.07216814034, 26709.6469424134],
    [0.00000000118, 5.86147583361, 25934.1243310894],
    [0.0000000012, 4.37644352908, 22003.9146348698],
    [0.00000000118, 1.28091235209, 51092.7260508548],
    [0.00000000124, 4.46638096237, 12903.9659631792],
    [0.00000000087, 3.75371922494, 11371.7046897582],
    [0.00000000105, 1.03348775258, 29864.334027309],
    [0.00000000102, 3.79120631714, 4535.0594369244],
    [0.000000001, 4.22110327599, 16522.6597160022],
    [0.00000000083, 0.48881708097, 14143.4952424306],
    [0.00000000104, 3.09530867679, 33019.0211122046],
    [0.00000000082, 3.78046378376, 6496.3749454294],
    [0.00000000095, 0.04440456339, 23013.5395395872],
    [0.0000000009, 3.51777734586, 59728.668054618],
    [0.00000000096, 2.78191205026, 18073.7049386502],
    [0.00000000085, 4.18391777188, 14712.317116458],
    [0.00000000078, 1.14918964449, 5643.1785636774],
    [0.00000000089, 2.47619928954, 33794.5437235286],
    [0.00000000086, 0.90925559387, 24072.9214697764],
    [0.00000000082, 4.76936774099, 4292.3308329504],
    [0.00000000071, 3.16306519605, 18451.07854656599],
    [0.00000000075, 2.481019861, 9917.6968745098],
    [0.00000000077, 0.95359760794, 12168.0026965746],
    [0.00000000077, 2.31326417218, 34596.3646546524],
    [0.00000000066, 5.00391005355, 17789.845619785],
    [0.00000000069, 3.56807197952, 206.1855484372],
    [0.00000000067, 0.15824995054, 9411.4646150872],
    [0.0000000008, 3.34063841179, 30639.856638633],
    [0.00000000079, 0.45349616594, 522.5774180938],
    [0.00000000081, 2.70303791495, 55022.9357470744],
    [0.00000000063, 5.3560417104, 10973.55568635],
    [0.00000000072, 3.91243748568, 37724.7534197482],
    [0.00000000065, 4.38390622795, 12964.300703391],
    [0.00000000072, 5.10426395732, 7632.9432596502],
    [0.00000000076, 4.5228711702, 36949.2308084242],
    [0.00000000056, 5.56799002018, 14314.1681130498],
    [0.00000000056, 6.06847702163, 7238.6755916],
    [0.00000000055, 0.78565730338, 242.728603974],
    [0.00000000065, 5.64264574233, 20452.8694122218],
    [0.00000000059, 2.45789576131, 6309.3741697912],
    [0.00000000063, 4.93902950155, 63658.8777508376],
    [0.00000000054, 4.46837485558, 11926.2544136688],
    [0.00000000063, 5.60540139125, 7477.522860216],
    [0.00000000052, 1.60421753323, 13341.6743113068],
    [0.00000000058, 5.34485751435, 41654.9631159678],
    [0.00000000057, 6.11511152595, 3.523118349],
    [0.00000000052, 6.00682819669, 17654.7805397496],
    [0.00000000045, 1.6151095959, 13521.7514415914],
    [0.00000000057, 0.3233910593, 103.0927742186],
    [0.00000000053, 2.02802886579, 1692.1656695024],
    [0.0000000005, 4.15302774433, 16200.7727245012],
    [0.00000000052, 2.76359289495, 15110.4661198662],
    [0.0000000005, 3.72979068217, 38526.574350872],
    [0.00000000043, 4.99091620758, 21393.5419698576],
    [0.00000000043, 6.20177127925, 3894.1818295422],
    [0.00000000045, 1.575572489, 71980.63357473118],
    [0.00000000056, 4.12499777098, 58953.145443294],
    [0.00000000055, 5.94965082599, 40879.4405046438],
    [0.00000000043, 3.05353412789, 17271.8840075264],
    [0.00000000039, 2.37773839854, 4933.2084403326],
    [0.00000000042, 6.19456604022, 15906.7641266826],
    [0.00000000045, 0.49163452709, 45585.1728121874],
    [0.0000000004, 0.85550500172, 13916.0191096416],
    [0.0000000005, 4.71611454241, 34570.0663348526],
    [0.00000000044, 0.07703439131, 67589.08744705719],
    [0.00000000042, 0.28632764759, 7234.794256242],
    [0.00000000037, 1.10347772788, 17256.6315363414],
    [0.00000000043, 0.78089021121, 24383.0791084414],
];

const Q1: &[Term] = &[
    [0.00113468869, PI, 0.0],
    [0.00000004145, 2.55097496137, 775.522611324],
    [0.0000000282, 4.73650705023, 1059.3819301892],
    [0.00000000864, 3.98044504977, 4705.7323075436],
    [0.00000000764, 0.61486125755, 12566.1516999828],
    [0.00000000751, 4.62474022101, 426.598190876],
    [0.00000000796, 2.02158659937, 3154.6870848956],
    [0.00000000644, 0.69559259678, 3930.2096962196],
    [0.00000000612, 6.26426352488, 1577.3435424478],
    [0.00000000621, 0.79773959656, 529.6909650946],
    [0.00000000585, 5.40852335472, 8635.9420037632],
    [0.00000000366, 0.50192650263, 7860.4193924392],
    [0.0000000037, 4.64271398704, 2352.8661537718],
    [0.00000000295, 4.07552700909, 398.1490034082],
    [0.00000000297, 3.39789415722, 20426.571092422],
    [0.0000000025, 1.87186356248, 11506.7697697936],
    [0.00000000274, 3.4539411325, 7084.8967811152],
    [0.0000000021, 1.86576581771, 11790.6290886588],
    [0.00000000229, 6.04643693381, 26.2983197998],
    [0.00000000241, 3.04713029553, 7.1135470008],
    [0.00000000206, 4.8189955682, 24356.7807886416],
    [0.00000000166, 4.89122508755, 213.299095438],
    [0.00000000172, 1.43130261169, 5507.5532386674],
    [0.00000000187, 1.9636027374, 16496.3613962024],
    [0.00000000145, 5.83536925719, 4694.0029547076],
    [0.00000000129, 3.25475414197, 15720.8387848784],
    [0.00000000142, 6.23984363024, 28286.9904848612],
    [0.00000000125, 5.86286019697, 6812.766815086],
    [0.00000000136, 4.8876327617, 11015.1064773348],
    [0.00000000094, 2.87124335022, 9437.762934887],
    [0.0000000009, 5.79789359195, 6283.0758499914],
    [0.00000000103, 6.06619406428, 5753.3848848968],
    [0.00000000082, 4.65528466625, 19651.048481098],
    [0.00000000098, 1.37715617388, 32217.2001810808],
    [0.00000000106, 4.88569284375, 1589.0728952838],
    [0.00000000078, 5.37714464092, 639.897286314],
    [0.00000000085, 1.51580640269, 10213.285546211],
    [0.00000000087, 1.87672206349, 801.8209311238],
    [0.00000000077, 0.0393437548, 14945.3161735544],
    [0.00000000075, 4.46336049824, 1052.2683831884],
    [0.00000000082, 0.23577362124, 2942.4634232916],
    [0.00000000069, 2.41777905251, 155.4203994342],
    [0.0000000006, 4.30541186808, 13367.9726311066],
    [0.00000000081, 3.14153630258, 0.2438174835],
    [0.00000000056, 0.11536145247, 796.2980068164],
    [0.00000000067, 2.7974117842, 36147.4098773004],
    [0.00000000054, 6.06198442474, 23581.2581773176],
    [0.0000000005, 3.75785752536, 1066.49547719],
    [0.00000000052, 0.86699297293, 2544.3144198834],
    [0.00000000059, 3.02375817751, 14143.4952424306],
    [0.00000000041, 5.73595254467, 17298.1823273262],
    [0.00000000047, 4.21744604774, 40077.61957352],
    [0.00000000045, 1.51311120001, 419.4846438752],
    [0.00000000039, 3.00298529074, 17260.1546546904],
    [0.00000000046, 1.47532793371, 18875.525869774],
    [0.0000000004, 1.90218522808, 18319.5365848796],
    [0.00000000036, 3.2679847258, 19804.8272915828],
    [0.00000000035, 1.18909598733, 27511.4678735372],
];

const Q2: &[Term] = &[
    [0.00001237314, 0.0, 0.0],
    [0.00000000156, 4.17827791124, 775.522611324],
    [0.00000000131, 0.4557696689, 1059.3819301892],
    [0.00000000089, 6.08163303545, 3930.2096962196],
    [0.00000000051, 5.18956342403, 529.6909650946],
    [0.00000000042, 1.47220974568, 1577.3435424478],
    [0.00000000053, 1.31246818908, 7860.4193924392],
    [0.00000000015, 5.67119610168, 337.8142631964],
];

const Q3: &[Term] = &[
    [0.00000126542, 0.0, 0.0],
];

const Q4: &[Term] = &[
    [0.00000001372, PI, 0.0],
];

const Q5: &[Term] = &[
    [0.00000000032, PI, 0.0],
];

const P0: &[Term] = &[
    [0.00000048408, 5.76054381234, 775.522611324],
    [0.00000036656, 1.01572916759, 1059.3819301892],
    [0.00000010147, 0.89874990533, 4705.7323075436],
    [0.00000009225, 5.08523515352, 3154.6870848956],
    [0.00000007856, 0.62393917012, 3930.2096962196],
    [0.00000007976, 1.32938474979, 426.598190876],
    [0.00000009098, 3.59816659677, 12566.1516999828],
    [0.00000006891, 2.32046988968, 8635.9420037632],
    [0.00000004566, 0.57013141989, 7860.4193924392],
    [0.00000004236, 1.42387417254, 1589.0728952838],
    [0.00000004541, 0.09108817855, 801.8209311238],
    [0.0000000367, 0.53038616499, 7.1135470008],
    [0.00000004753, 2.52994390566, 337.8142631964],
    [0.00000003523, 0.30506773876, 20426.571092422],
    [0.00000002987, 3.35977463421, 398.1490034082],
    [0.00000003152, 0.22265746056, 7084.8967811152],
    [0.00000003219, 2.50965126428, 11506.7697697936],
    [0.00000002614, 1.93214733028, 11790.6290886588],
    [0.00000002302, 3.72037386312, 26.2983197998],
    [0.00000002457, 1.72880492944, 24356.7807886416],
    [0.00000002276, 5.16896528528, 16496.3613962024],
    [0.00000001931, 3.31809884385, 4694.0029547076],
    [0.00000001611, 3.31882519786, 15720.8387848784],
    [0.00000001588, 3.1360314939, 529.6909650946],
    [0.00000001664, 2.79768565257, 796.2980068164],
    [0.00000001703, 3.15206410103, 28286.9904848612],
    [0.00000001639, 2.15665771269, 6812.766815086],
    [0.00000001543, 1.64286733089, 11015.1064773348],
    [0.00000001343, 4.47145301297, 3128.3887650958],
    [0.00000001065, 0.19629727499, 1577.3435424478],
    [0.00000001032, 4.71704692795, 19651.048481098],
    [0.00000001179, 4.5754213036, 32217.2001810808],
    [0.00000001008, 0.28567001717, 213.299095438],
    [0.00000001011, 0.58712231552, 639.897286314],
    [0.00000000953, 3.35633847586, 19804.8272915828],
    [0.0000000086, 3.06267368941, 14945.3161735544],
    [0.00000000818, 5.998753927, 36147.4098773004],
    [0.00000000677, 6.12159875162, 23581.2581773176],
    [0.00000000707, 2.26394711328, 5753.3848848968],
    [0.0000000067, 1.52334598126, 1194.4470102246],
    [0.00000000841, 0.34952278193, 2942.4634232916],
    [0.00000000585, 3.74310062313, 32370.9789915656],
    [0.00000000669, 5.89220790176, 7058.5984613154],
    [0.00000000654, 1.51211599299, 4732.0306273434],
    [0.00000000585, 2.03907925466, 10977.078804699],
    [0.00000000541, 2.88765454448, 4164.311989613],
    [0.00000000568, 1.13887131411, 40077.61957352],
    [0.00000000475, 4.78721318437, 3738.761430108],
    [0.00000000509, 1.87400083512, 2544.3144198834],
    [0.00000000451, 1.24678231335, 27511.4678735372],
    [0.00000000448, 0.98345220592, 6283.0758499914],
    [0.00000000512, 4.48206990897, 18875.525869774],
    [0.00000000517, 3.64959988215, 17260.1546546904],
    [0.00000000511, 4.47451179968, 18319.5365848796],
    [0.00000000427, 5.88502086709, 5223.6939198022],
    [0.00000000396, 1.56279774412, 5507.5532386674],
    [0.00000000467, 1.02937838875, 10988.808157535],
    [0.00000000421, 2.4371256687, 5884.9268465832],
    [0.00000000462, 2.36349494609, 2146.1654164752],
    [0.00000000381, 1.83571428869, 2118.7638603784],
    [0.00000000371, 3.54293611097, 1748.016413067],
    [0.00000000395, 2.56214165676, 44007.8292697396],
    [0.0000000034, 0.42980390638, 6681.2248533996],
    [0.00000000329, 5.39234481875, 3340.6124266998],
    [0.00000000333, 1.99873998941, 1551.045222648],
    [0.00000000304, 2.65760398361, 31441.6775697568],
    [0.00000000357, 2.44891955814, 14919.0178537546],
    [0.00000000338, 4.93432152606, 10213.285546211],
    [0.00000000318, 5.90104776895, 22805.7355659936],
    [0.00000000276, 2.18786268344, 12139.5535091068],
    [0.00000000253, 2.96247108175, 9437.762934887],
    [0.00000000298, 2.93315433827, 8662.240323563],
    [0.00000000295, 3.87718280107, 18849.2275499742],
    [0.00000000276, 3.98537809677, 47938.0389659592],
    [0.00000000229, 3.42866131061, 4136.9104335162],
    [0.00000000228, 3.70811020595, 13095.8426650774],
    [0.00000000231, 3.82954747672, 2352.8661537718],
    [0.00000000207, 4.0700736981, 35371.8872659764],
    [0.00000000207, 2.2950752365, 9623.6882766912],
    [0.00000000217, 4.33945658527, 8827.3902698748],
    [0.00000000251, 4.86735107643, 1349.8674096588],
    [0.00000000191, 0.13490625249, 45892.73043315699],
    [0.00000000222, 3.81514145421, 5486.777843175],
    [0.00000000207, 4.07688904541, 1066.49547719],
    [0.00000000182, 3.61090924384, 76.2660712756],
    [0.00000000244, 0.16416593867, 1592.5960136328],
    [0.00000000242, 2.91593044016, 7342.4577801806],
    [0.00000000202, 1.03641314545, 26735.9452622132],
    [0.00000000178, 4.37303082114, 13367.9726311066],
    [0.00000000189, 2.58038524206, 2379.1644735716],
    [0.00000000192, 5.40858067278, 51868.2486621788],
    [0.00000000166, 6.23331138967, 951.7184062506],
    [0.00000000208, 1.13822357463, 1052.2683831884],
    [0.00000000184, 5.29450656083, 22779.4372461938],
    [0.00000000179, 2.71525927904, 12036.4607348882],
    [0.00000000189, 2.72430799354, 155.4203994342],
    [0.0000000015, 5.3174083454, 7079.3738568078],
    [0.00000000142, 5.48368636125, 39302.096962196],
    [0.00000000143, 0.51464179508, 58458.88213313979],
    [0.00000000169, 4.35415995312, 12592.4500197826],
    [0.0000000015, 3.99261668953, 955.5997416086],
    [0.00000000129, 5.78826594337, 17298.1823273262],
    [0.00000000126, 1.33299464405, 553.5694028424],
    [0.00000000154, 1.43933999763, 18073.7049386502],
    [0.00000000131, 3.20972043387, 16730.4636895958],
    [0.00000000122, 6.23991905901, 11769.8536931664],
    [0.00000000135, 0.54856336899, 55798.4583583984],
    [0.00000000131, 4.95633784195, 149.5631971346],
    [0.00000000131, 2.45452578666, 30666.1549584328],
    [0.00000000113, 6.01398683017, 15508.6151232744],
    [0.00000000126, 0.1995785687, 14143.4952424306],
    [0.00000000149, 4.40690243358, 5088.6288397668],
    [0.00000000137, 2.86995289491, 22003.9146348698],
    [0.00000000109, 5.48690183066, 4690.4798363586],
    [0.00000000109, 1.20674646211, 433.7117378768],
    [0.00000000108, 0.90143734976, 10021.8372800994],
    [0.00000000127, 5.72565849791, 8429.2412664666],
    [0.00000000107, 3.43850897714, 5481.2549188676],
    [0.00000000113, 0.51537692045, 26709.6469424134],
    [0.00000000112, 4.59345373382, 419.4846438752],
    [0.00000000098, 0.61492585717, 43232.3066584156],
    [0.000000001, 6.12565848281, 853.196381752],
    [0.00000000097, 2.46719421679, 3634.6210245184],
    [0.00000000128, 4.27829371557, 10447.3878396044],
    [0.00000000116, 4.29899596381, 25934.1243310894],
    [0.00000000095, 0.92265810674, 21228.3920235458],
    [0.00000000124, 2.89501154918, 12903.9659631792],
    [0.00000000105, 5.77510311244, 16522.6597160022],
    [0.000000001, 3.35419612945, 9225.539273283],
    [0.00000000086, 5.06461136949, 1990.745017041],
    [0.00000000094, 1.97169684708, 59728.668054618],
    [0.00000000094, 5.72684669684, 29864.334027309],
    [0.00000000081, 2.21250601223, 6496.3749454294],
    [0.00000000086, 3.87218941366, 34596.3646546524],
    [0.00000000086, 5.62170395389, 24072.9214697764],
    [0.00000000087, 4.78724010477, 23013.5395395872],
    [0.0000000007, 1.56958824803, 18451.07854656599],
    [0.00000000072, 1.85916925566, 14712.317116458],
    [0.0000000007, 2.34152947716, 25158.6017197654],
    [0.00000000068, 2.02993588285, 47162.5163546352],
    [0.00000000094, 2.04348349319, 4535.0594369244],
    [0.00000000071, 2.68650902714, 5643.1785636774],
    [0.00000000066, 3.42884210449, 17789.845619785],
    [0.00000000075, 0.16713170255, 8031.0922630584],
    [0.00000000083, 1.78826318163, 30639.856638633],
    [0.00000000069, 4.88089015375, 9411.4646150872],
    [0.00000000064, 1.27652699764, 7238.6755916],
    [0.00000000075, 0.87064603583, 33794.5437235286],
    [0.00000000079, 1.33737096549, 11371.7046897582],
    [0.00000000063, 2.75646719146, 12964.300703391],
    [0.00000000067, 2.2074781926, 6069.7767545534],
    [0.00000000068, 0.91277876859, 20452.8694122218],
    [0.00000000066, 3.39479625927, 63658.8777508376],
    [0.00000000061, 4.01600871808, 6309.3741697912],
    [0.00000000067, 0.48513852719, 4292.3308329504],
    [0.00000000056, 3.57009606702, 13521.7514415914],
    [0.00000000058, 3.99366079715, 9917.6968745098],
    [0.00000000052, 1.16524536013, 7632.9432596502],
    [0.00000000069, 5.36659822727, 12168.0026965746],
    [0.00000000052, 3.76116818733, 29088.811415985],
    [0.00000000053, 0.04310038284, 13341.6743113068],
    [0.00000000057, 5.28939062323, 38526.574350872],
    [0.00000000051, 2.93259931846, 11926.2544136688],
    [0.00000000059, 2.2969917281, 37724.7534197482],
    [0.0000000005, 5.30434436014, 242.728603974],
    [0.00000000047, 3.44537361839, 51092.7260508548],
    [0.00000000046, 1.44538705664, 110.2063212194],
    [0.00000000053, 0.459390825, 1692.1656695024],
    [0.00000000059, 3.91258916006, 7477.522860216],
    [0.00000000043, 3.76403611906, 17654.7805397496],
    [0.00000000043, 3.40393094298, 21393.5419698576],
    [0.00000000044, 1.49187466545, 17271.8840075264],
    [0.00000000044, 2.19033191297, 10973.55568635],
    [0.00000000046, 4.81786358119, 67589.08744705719],
    [0.00000000052, 3.16779492131, 34570.0663348526],
    [0.00000000041, 4.58641963748, 15906.7641266826],
    [0.00000000046, 2.33354058024, 24383.0791084414],
    [0.00000000039, 5.18127930314, 33019.0211122046],
    [0.00000000046, 3.72285433921, 41654.9631159678],
    [0.00000000041, 1.67798687, 103.0927742186],
    [0.00000000048, 1.03654093101, 15110.4661198662],
    [0.00000000038, 2.94419417948, 21202.093703746],
    [0.00000000051, 3.22403140905, 14314.1681130498],
];

const P1: &[Term] = &[
    [0.00010180375, 0.0, 0.0],
    [0.00000004328, 1.01402968363, 775.522611324],
    [0.00000002841, 3.1632192869, 1059.3819301892],
    [0.00000002083, 6.08909795513, 3930.2096962196],
    [0.00000001287, 1.31537228855, 7860.4193924392],
    [0.00000000902, 2.43940606212, 4705.7323075436],
    [0.00000000831, 3.55399383131, 3154.6870848956],
    [0.00000000842, 5.47400224497, 529.6909650946],
    [0.00000000784, 5.34154285402, 12566.1516999828],
    [0.00000000748, 3.06979092266, 426.598190876],
    [0.00000000699, 2.74375247211, 11790.6290886588],
    [0.0000000061, 3.86393472006, 8635.9420037632],
    [0.00000000528, 1.41689471688, 1577.3435424478],
    [0.00000000417, 4.17048596856, 15720.8387848784],
    [0.00000000312, 3.21957927458, 2352.8661537718],
    [0.00000000311, 1.85217996801, 20426.571092422],
    [0.0000000027, 0.37881946333, 11506.7697697936],
    [0.00000000286, 4.98144114711, 7084.8967811152],
    [0.00000000291, 2.74816514443, 398.1490034082],
    [0.00000000244, 1.33094211623, 26.2983197998],
    [0.00000000213, 4.43368923488, 213.299095438],
    [0.00000000261, 5.59648119418, 19651.048481098],
    [0.00000000218, 3.27732711516, 24356.7807886416],
    [0.00000000254, 5.85262420745, 5753.3848848968],
    [0.00000000204, 0.4398820719, 16496.3613962024],
    [0.00000000152, 1.13944260129, 4694.0029547076],
    [0.0000000015, 2.86809918005, 5507.5532386674],
    [0.00000000144, 1.99967116806, 7.1135470008],
    [0.00000000151, 4.70237432297, 28286.9904848612],
    [0.00000000168, 0.73893975633, 23581.2581773176],
    [0.00000000142, 0.12673571406, 11015.1064773348],
    [0.00000000126, 4.29011027531, 6812.766815086],
    [0.00000000105, 6.1273940115, 32217.2001810808],
    [0.00000000104, 5.37161554497, 796.2980068164],
    [0.00000000111, 2.1644626039, 27511.4678735372],
    [0.00000000104, 3.54513336445, 801.8209311238],
    [0.00000000108, 3.32478924535, 1589.0728952838],
    [0.00000000083, 4.30884998462, 9437.762934887],
    [0.00000000079, 3.81848554294, 639.897286314],
    [0.0000000008, 1.5562137855, 14945.3161735544],
    [0.00000000073, 1.26908678775, 36147.4098773004],
    [0.00000000087, 0.26484681164, 2942.4634232916],
    [0.00000000081, 0.11414302138, 10213.285546211],
    [0.00000000074, 2.89406874499, 1052.2683831884],
    [0.00000000081, 4.71235175569, 0.2438174835],
    [0.00000000057, 4.10145398983, 6283.0758499914],
    [0.00000000074, 3.58995525779, 31441.6775697568],
    [0.00000000053, 5.74381083459, 13367.9726311066],
    [0.00000000049, 2.18852253335, 1066.49547719],
    [0.00000000059, 4.29657364437, 155.4203994342],
    [0.00000000051, 2.69380560042, 40077.61957352],
    [0.00000000048, 2.98661532639, 18875.525869774],
    [0.00000000042, 1.50503799147, 17260.1546546904],
    [0.00000000052, 2.21397667565, 2544.3144198834],
    [0.0000000005, 5.0155153198, 35371.8872659764],
    [0.0000000004, 0.33115659422, 18319.5365848796],
    [0.00000000035, 4.90821231573, 19804.8272915828],
];

const P2: &[Term] = &[
    [0.00004701998, 0.0, 0.0],
    [0.00000000189, 2.68775678259, 775.522611324],
    [0.00000000127, 5.17311759672, 1059.3819301892],
    [0.00000000044, 3.11484228078, 1577.3435424478],
    [0.0000000004, 4.08880680053, 4705.7323075436],
    [0.00000000015, 0.95917101569, 337.8142631964],
];

const P3: &[Term] = &[
    [0.00000054174, PI, 0.0],
];

const P4: &[Term] = &[
    [0.00000002508, PI, 0.0],
];

pub static EARTH_MOON: EllipticTable = EllipticTable {
    series: [
        &[A0, A1, A2],
        &[L0, L1, L2, L3, L4, L5],
        &[K0, K1, K2, K3, K4, K5],
        &[H0, H1, H2, H3, H4, H5],
        &[Q0, Q1, Q2, Q3, Q4, Q5],
        &[P0, P1, P2, P3, P4],
    ],
};
